//! Safety gate trait definition

use async_trait::async_trait;

use crate::verdict::{FailurePolicy, Verdict};

/// Trait for implementing safety gates
///
/// Gates screen user messages before they reach the completion
/// backend. `evaluate` never fails the pipeline with a transport
/// error: remote failures surface as [`Verdict::Error`] and the
/// pipeline applies the gate's [`FailurePolicy`].
#[async_trait]
pub trait Gate: Send + Sync {
    /// Name of this gate (used in logs)
    fn name(&self) -> &str;

    /// User-facing warning returned when this gate blocks a message
    fn warning(&self) -> &str;

    /// How evaluation errors are resolved for this gate
    fn failure_policy(&self) -> FailurePolicy;

    /// Screen a message
    async fn evaluate(&self, message: &str) -> Verdict;
}
