//! Environment configuration error types.

use thiserror::Error;

/// Environment record loading error.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("failed to read environment file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse environment file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to serialize environment: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}
