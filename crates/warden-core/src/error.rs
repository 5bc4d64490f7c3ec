//! Error types shared across the warden crates

/// Result type alias for warden operations
pub type Result<T> = std::result::Result<T, WardenError>;

/// Errors produced by the shared foundation
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything without a more specific variant
    #[error("{0}")]
    Other(String),
}

impl WardenError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
