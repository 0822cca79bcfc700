use mintcart_constants::ParseNetworkError;

/// Error type for the [`crate::config`] module. Captures errors related to
/// loading configuration from the environment or from a claim list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing environment variable
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Unknown network name or id.
    #[error(transparent)]
    Network(#[from] ParseNetworkError),
    /// Error parsing JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Error reading a claim list from disk.
    #[error("failed to read claim list: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
