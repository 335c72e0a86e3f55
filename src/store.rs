use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata; // .code() / .message()
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

/// Write-only object storage, one JSON document per key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, content: String) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BlobStore for S3Store {
    async fn put(&self, key: &str, content: String) -> Result<(), StoreError> {
        let r = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(content.into_bytes()))
            .send()
            .await;

        match r {
            Ok(_) => Ok(()),
            Err(e) => {
                let code = e.code().unwrap_or("unknown").to_string();
                let msg = e.message().map(str::to_string).unwrap_or_else(|| e.to_string());
                tracing::error!(bucket=%self.bucket, key=%key, err_code=%code, err_msg=%msg, "S3 PutObject failed");
                Err(StoreError::Backend(format!("{code}: {msg}")))
            }
        }
    }
}

/// Keeps objects in a map.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    objects: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.objects.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[async_trait]
impl BlobStore for MemoryStore {
    async fn put(&self, key: &str, content: String) -> Result<(), StoreError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|e| StoreError::Backend(format!("memory store poisoned: {e}")))?;
        objects.insert(key.to_string(), content);
        Ok(())
    }
}
