use serde::Serialize;
use serde_json::{json, Value as Json};
use std::collections::BTreeMap;

pub const FALLBACK_BODY: &str = r#"{"error": "Error processing response"}"#;

const CORS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Proxy-integration response shape handed back to the gateway.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

fn cors_headers() -> BTreeMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Text bodies go through untouched; everything else is JSON-encoded.
fn body_text<T: Serialize + ?Sized>(body: &T) -> Result<String, serde_json::Error> {
    match serde_json::to_value(body)? {
        Json::String(s) => Ok(s),
        other => serde_json::to_string(&other),
    }
}

pub fn envelope<T: Serialize + ?Sized>(status: u16, body: &T) -> ApiResponse {
    let body = body_text(body).unwrap_or_else(|e| {
        tracing::error!(err = %e, "response body serialization failed");
        FALLBACK_BODY.to_string()
    });
    ApiResponse {
        status_code: status,
        headers: cors_headers(),
        body,
    }
}

pub fn error_envelope(status: u16, message: &str) -> ApiResponse {
    envelope(status, &json!({ "error": message }))
}
