//! Shared application state

use std::sync::Arc;

use warden_gates::GatePipeline;
use warden_relay::CompletionBackend;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<GatePipeline>,
    pub relay: Arc<dyn CompletionBackend>,
}

impl AppState {
    pub fn new(pipeline: Arc<GatePipeline>, relay: Arc<dyn CompletionBackend>) -> Self {
        Self { pipeline, relay }
    }
}
