pub const DEFAULT_BUCKET: &str = "url-shortener-storage-lambda-example";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bucket: String,
}

impl Config {
    /// Read once at cold start.
    pub fn from_env() -> Self {
        let bucket = std::env::var("BUCKET_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());
        Self { bucket }
    }
}
