//! Logging setup for the warden service
//!
//! Structured logging via the `tracing` crate, initialized once at
//! application startup. `RUST_LOG` overrides the configured directive
//! when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default filter directive, e.g. "info" or "warden_server=debug,info"
    pub directive: String,
    /// Line format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Debug logs for the named crate, info for everything else
    pub fn for_crate(name: &str) -> Self {
        Self {
            directive: format!("{}=debug,info", name),
            format: LogFormat::Pretty,
        }
    }
}

/// Initialize logging for the application
///
/// Should be called once at startup, before any spans or events are
/// emitted.
///
/// # Example
///
/// ```
/// use warden_core::logging::{init_logging, LogConfig};
///
/// init_logging(LogConfig::for_crate("warden_server"));
/// ```
pub fn init_logging(config: LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.directive));

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}
