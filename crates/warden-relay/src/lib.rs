//! Completion Backend Abstraction
//!
//! This crate relays screened chat messages to a completion service and
//! returns the assistant's reply as plain text.
//!
//! # Example
//!
//! ```no_run
//! use warden_core::RelayConfig;
//! use warden_relay::{CompletionBackend, OpenAIBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RelayConfig {
//!         base_url: "https://api.openai.com/v1".to_string(),
//!         api_key: "your-api-key".to_string(),
//!         model: "gpt-4o-mini".to_string(),
//!     };
//!
//!     let backend = OpenAIBackend::new(&config)?;
//!     let reply = backend.complete("Hello, how are you?").await?;
//!     println!("Reply: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;

// Backend implementations
pub mod openai;

// Re-exports
pub use backend::CompletionBackend;
pub use error::{RelayError, Result};
pub use openai::OpenAIBackend;
