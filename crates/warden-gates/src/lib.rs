//! Safety Gates
//!
//! Screening for chat messages before they reach the completion
//! backend. Each gate returns a [`Verdict`]; the pipeline resolves
//! verdicts through each gate's [`FailurePolicy`] and stops at the
//! first block.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use warden_core::SafetyConfig;
//! use warden_gates::{
//!     ContentSafetyClient, ContentSafetyGate, GatePipeline, PromptShieldClient, PromptShieldGate,
//! };
//!
//! # fn main() -> warden_gates::Result<()> {
//! let config = SafetyConfig {
//!     endpoint: "https://safety.example.com".to_string(),
//!     key: "subscription-key".to_string(),
//! };
//!
//! let pipeline = GatePipeline::new()
//!     .with_gate(ContentSafetyGate::new(Arc::new(ContentSafetyClient::new(&config)?)))
//!     .with_gate(PromptShieldGate::new(Arc::new(PromptShieldClient::new(&config)?)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gate;
pub mod pipeline;
pub mod types;
pub mod verdict;

// Built-in gates
pub mod content_safety;
pub mod prompt_shield;

// Re-exports
pub use error::{GateError, Result};
pub use gate::Gate;
pub use pipeline::{GateOutcome, GatePipeline};
pub use types::{Category, ShieldAnalysis, TextAnalysis};
pub use verdict::{FailurePolicy, Resolution, Verdict};

pub use content_safety::{
    ContentSafetyClient, ContentSafetyGate, TextAnalyzer, UNSAFE_CONTENT_WARNING,
};
pub use prompt_shield::{PromptShield, PromptShieldClient, PromptShieldGate, JAILBREAK_WARNING};
