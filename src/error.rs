use thiserror::Error;

/// Error type for jmx-connector operations
#[derive(Debug, Error)]
pub enum JmxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("MBean source failed: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for jmx-connector operations
pub type Result<T> = std::result::Result<T, JmxError>;

/// Fails with `InvalidArgument("<name> is empty")` when `value` is empty.
pub(crate) fn require_non_empty(value: String, name: &str) -> Result<String> {
    if value.is_empty() {
        return Err(JmxError::InvalidArgument(format!("{} is empty", name)));
    }
    Ok(value)
}
