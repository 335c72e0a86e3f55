use serde::{Deserialize, Serialize};

/// Normalized request produced by the body decoder, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenRequest {
    pub original_url: Option<String>,
    pub expiration_time: Option<String>,
}

/// What gets written to the bucket as `<code>.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub original_url: String,
    pub expiration_time_in_seconds: i64, // relative ttl, never an epoch
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub original_url: String,
    // raw caller input, echoed back untouched
    pub expiration_time: Option<String>,
}
