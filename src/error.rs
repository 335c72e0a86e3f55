use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("originalUrl is required")]
    MissingOriginalUrl,
    #[error("Expiration time must be in the future")]
    ExpirationInPast,
    #[error("Invalid expirationTime format. Please provide either an ISO-8601 timestamp or number of hours")]
    InvalidExpirationFormat,
    #[error("{0}")]
    InvalidBody(String),
    #[error("{0}")]
    Persist(String),
    #[error("{0}")]
    Internal(String),
}

impl ShortenError {
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingOriginalUrl | Self::ExpirationInPast | Self::InvalidExpirationFormat => 400,
            Self::InvalidBody(_) | Self::Persist(_) | Self::Internal(_) => 500,
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Persist(msg) => format!("Error saving data to S3: {msg}"),
            Self::InvalidBody(msg) | Self::Internal(msg) => {
                format!("Internal server error: {msg}")
            }
            client => client.to_string(),
        }
    }
}

impl From<StoreError> for ShortenError {
    fn from(e: StoreError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ShortenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
