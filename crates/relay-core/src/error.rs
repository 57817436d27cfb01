use thiserror::Error;

/// Top-level error type for Relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed message handed in by a channel.
    #[error("message error: {0}")]
    Message(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
