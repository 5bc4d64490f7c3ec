//! HTTP request handlers

use axum::{extract::State, Json};

use warden_gates::GateOutcome;

use crate::{
    error::{ApiError, Result},
    models::{ChatRequest, ChatResponse},
    state::AppState,
};

/// Health check
pub async fn health() -> &'static str {
    "OK"
}

/// Screen a chat message and relay it to the completion backend
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    // Gates screen the original message, not a trimmed copy
    match state.pipeline.evaluate(&request.message).await {
        GateOutcome::Blocked { warning, .. } => Ok(Json(ChatResponse { response: warning })),
        GateOutcome::Cleared => {
            let reply = state.relay.complete(&request.message).await?;
            Ok(Json(ChatResponse { response: reply }))
        }
    }
}
