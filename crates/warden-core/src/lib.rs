//! Warden Core
//!
//! Shared foundation for the warden service: error handling,
//! configuration loading, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{Config, RelayConfig, SafetyConfig, ServerConfig};
pub use error::{Result, WardenError};
pub use logging::{init_logging, LogConfig, LogFormat};
