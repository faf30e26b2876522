use thiserror::Error;

/// Top-level error type for Sprout.
#[derive(Debug, Error)]
pub enum SproutError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error delivering a reminder notification.
    #[error("notify error: {0}")]
    Notify(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
