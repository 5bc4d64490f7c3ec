//! Warden Server - guarded chat relay API
//!
//! Screens chat messages through safety gates before relaying them
//! to a completion backend.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use warden_core::{init_logging, Config, LogConfig};
use warden_gates::{
    ContentSafetyClient, ContentSafetyGate, GatePipeline, PromptShieldClient, PromptShieldGate,
};
use warden_relay::OpenAIBackend;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

/// Browser origins allowed to call the API
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LogConfig::for_crate("warden_server"));

    let config = Config::from_env()?;

    // Content safety screens first, then the prompt shield
    let pipeline = GatePipeline::new()
        .with_gate(ContentSafetyGate::new(Arc::new(ContentSafetyClient::new(
            &config.safety,
        )?)))
        .with_gate(PromptShieldGate::new(Arc::new(PromptShieldClient::new(
            &config.safety,
        )?)));

    let relay = OpenAIBackend::new(&config.relay)?;

    let state = AppState::new(Arc::new(pipeline), Arc::new(relay));
    let app = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("🚀 Warden server listening on http://{}", addr);
    tracing::info!("  GET  / - Health check");
    tracing::info!("  POST /api/chat - Screen and relay a chat message");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .layer(cors_layer())
        .with_state(state)
}

/// CORS for the local frontend dev servers
///
/// Credentialed requests forbid the wildcard forms, so methods and
/// headers mirror whatever the preflight asks for.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
