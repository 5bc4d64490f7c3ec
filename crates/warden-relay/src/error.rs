//! Error types for completion backends

/// Result type for completion operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors that can occur while relaying a message to a backend
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RelayError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RelayError::parse("truncated body");
        assert!(matches!(err, RelayError::Parse(_)));
        assert_eq!(err.to_string(), "Failed to parse response: truncated body");
    }

    #[test]
    fn test_api_error_display() {
        let err = RelayError::Api {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): invalid key");
    }
}
