//! Error types for upwatch configuration loading.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the endpoint list.
///
/// All of these are fatal: they are surfaced at startup, before the
/// polling loop begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("malformed endpoint list: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("endpoint list is empty")]
    NoEndpoints,

    #[error("endpoint url has no scheme or host: {0}")]
    InvalidUrl(String),
}
