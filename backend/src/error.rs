use thiserror::Error;

/// Failures while reading process configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SPOONACULAR_API_KEY is not set and no secret file was found")]
    MissingApiKey,

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Failures of the local recipe store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Failures talking to the recipe provider.
///
/// These never reach HTTP clients directly; the adapter logs them and degrades
/// to an empty result.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider answered with status {0}")]
    Status(u16),

    #[error("Unexpected provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Status(404))
    }
}
