//! Error types for safety gate operations

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur while evaluating a safety gate
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("Service error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Failed to parse the service response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GateError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
