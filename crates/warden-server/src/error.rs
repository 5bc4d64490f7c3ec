//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request message was empty after trimming.
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Completion backend failed.
    #[error("completion backend error: {0}")]
    Relay(#[from] warden_relay::RelayError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::EmptyMessage => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Relay(err) => {
                tracing::error!("Completion backend failed: {}", err);
                // The upstream error is not echoed to the client
                (
                    StatusCode::BAD_GATEWAY,
                    "The assistant is currently unavailable".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorBody { detail })).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
