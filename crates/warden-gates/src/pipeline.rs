//! Ordered gate pipeline

use std::sync::Arc;

use crate::{
    gate::Gate,
    verdict::{FailurePolicy, Resolution, Verdict},
};

/// Result of running a message through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Every gate allowed the message
    Cleared,
    /// A gate blocked the message
    Blocked {
        /// Name of the blocking gate
        gate: String,
        /// The gate's user-facing warning
        warning: String,
    },
}

/// Ordered collection of gates evaluated in sequence
///
/// Evaluation stops at the first gate whose policy-resolved verdict
/// blocks the message; later gates never run.
#[derive(Clone)]
pub struct GatePipeline {
    gates: Vec<Arc<dyn Gate>>,
}

impl GatePipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Add a gate to the end of the pipeline
    pub fn with_gate<G: Gate + 'static>(mut self, gate: G) -> Self {
        self.gates.push(Arc::new(gate));
        self
    }

    /// Get the number of gates in the pipeline
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Run a message through every gate in order
    ///
    /// Each gate reads the same message and returns a fresh verdict; no
    /// state carries over between calls.
    pub async fn evaluate(&self, message: &str) -> GateOutcome {
        for gate in &self.gates {
            let verdict = gate.evaluate(message).await;

            if let Verdict::Error { message: detail } = &verdict {
                let applied = match gate.failure_policy() {
                    FailurePolicy::FailOpen => "failing open",
                    FailurePolicy::FailClosed => "failing closed",
                };
                tracing::warn!("Gate {} errored, {}: {}", gate.name(), applied, detail);
            }

            match gate.failure_policy().resolve(verdict) {
                Resolution::Allow => {
                    tracing::debug!("Gate {} allowed message", gate.name());
                }
                Resolution::Block { reason } => {
                    tracing::warn!("Gate {} blocked message: {}", gate.name(), reason);
                    return GateOutcome::Blocked {
                        gate: gate.name().to_string(),
                        warning: gate.warning().to_string(),
                    };
                }
            }
        }

        GateOutcome::Cleared
    }
}

impl Default for GatePipeline {
    fn default() -> Self {
        Self::new()
    }
}
