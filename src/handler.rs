use aws_config::BehaviorVersion;
use chrono::{DateTime, Utc};
use serde_json::Value as Json;
use std::sync::Arc;

use crate::{
    body,
    config::Config,
    error::ShortenError,
    expiry::parse_expiration,
    id::{new_code, object_key},
    model::{ShortenRequest, ShortenResponse, UrlRecord},
    response::{envelope, error_envelope, ApiResponse},
    store::{BlobStore, S3Store},
};

/// Process-scoped state, built once per cold start.
#[derive(Clone)]
pub struct Ctx {
    pub store: Arc<dyn BlobStore>,
}

impl Ctx {
    pub async fn new(cfg: &Config) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let s3 = aws_sdk_s3::Client::new(&config);
        tracing::info!(bucket = %cfg.bucket, "using S3 bucket");
        Self::with_store(Arc::new(S3Store::new(s3, cfg.bucket.clone())))
    }

    pub fn with_store(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }
}

/// Entry point for one invocation. Never fails: every error becomes an
/// enveloped response.
pub async fn handle(event: Json, ctx: &Ctx) -> ApiResponse {
    tracing::info!(event = %event, "raw input");

    let result = match body::extract(&event) {
        Ok(req) => shorten(req, ctx, Utc::now()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(out) => envelope(200, &out),
        Err(e) => {
            let status = e.status();
            let message = e.public_message();
            if status >= 500 {
                tracing::error!(status, error = %message, "request failed");
            } else {
                tracing::info!(status, error = %message, "request rejected");
            }
            error_envelope(status, &message)
        }
    }
}

async fn shorten(
    req: ShortenRequest,
    ctx: &Ctx,
    now: DateTime<Utc>,
) -> Result<ShortenResponse, ShortenError> {
    let original_url = match req.original_url {
        Some(u) if !u.trim().is_empty() => u,
        _ => return Err(ShortenError::MissingOriginalUrl),
    };

    let ttl = parse_expiration(req.expiration_time.as_deref(), now)?;

    let code = new_code();
    let record = UrlRecord {
        original_url: original_url.clone(),
        expiration_time_in_seconds: ttl,
    };
    let payload =
        serde_json::to_string(&record).map_err(|e| ShortenError::Persist(e.to_string()))?;

    let key = object_key(&code);
    tracing::info!(key = %key, record = %payload, "writing record");
    ctx.store.put(&key, payload).await?;

    Ok(ShortenResponse {
        code,
        original_url,
        expiration_time: req.expiration_time,
    })
}
