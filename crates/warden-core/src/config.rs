//! Configuration for the warden service
//!
//! All settings come from environment variables, read once at startup.
//! Components receive their settings as explicit structs; nothing reads
//! the environment after startup.

use crate::error::{Result, WardenError};

/// Default base URL for the completion backend
pub const DEFAULT_RELAY_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model requested from the completion backend
pub const DEFAULT_RELAY_MODEL: &str = "gpt-4o-mini";

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Credentials for the content safety service
///
/// The same endpoint and key serve both the text analyze and the
/// prompt shield APIs.
#[derive(Debug, Clone)]
pub struct SafetyConfig {
    /// Service endpoint, e.g. `https://<resource>.cognitiveservices.azure.com`
    pub endpoint: String,
    /// Subscription key
    pub key: String,
}

/// Settings for the completion backend
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the chat completions API
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Model to request
    pub model: String,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub safety: SafetyConfig,
    pub relay: RelayConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Required variables: `AZURE_CONTENT_SAFETY_ENDPOINT`,
    /// `AZURE_CONTENT_SAFETY_KEY`, `OPENAI_API_KEY`. A missing required
    /// variable is an error, so startup fails before any listener is
    /// bound.
    ///
    /// Optional variables: `OPENAI_BASE_URL`, `WARDEN_MODEL`,
    /// `WARDEN_HOST`, `WARDEN_PORT`.
    pub fn from_env() -> Result<Self> {
        let endpoint = required("AZURE_CONTENT_SAFETY_ENDPOINT")?;
        let key = required("AZURE_CONTENT_SAFETY_KEY")?;
        let api_key = required("OPENAI_API_KEY")?;

        let base_url = optional("OPENAI_BASE_URL", DEFAULT_RELAY_BASE_URL);
        let model = optional("WARDEN_MODEL", DEFAULT_RELAY_MODEL);
        let host = optional("WARDEN_HOST", DEFAULT_HOST);
        let port = match std::env::var("WARDEN_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| WardenError::config("WARDEN_PORT must be a number"))?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            safety: SafetyConfig {
                // Trailing slashes are trimmed so path joining is uniform
                endpoint: endpoint.trim_end_matches('/').to_string(),
                key,
            },
            relay: RelayConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key,
                model,
            },
            server: ServerConfig { host, port },
        };

        tracing::info!("Configuration loaded from environment");

        Ok(config)
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| WardenError::config(format!("{} must be set", name)))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 3] = [
        "AZURE_CONTENT_SAFETY_ENDPOINT",
        "AZURE_CONTENT_SAFETY_KEY",
        "OPENAI_API_KEY",
    ];

    const OPTIONAL: [&str; 4] = ["OPENAI_BASE_URL", "WARDEN_MODEL", "WARDEN_HOST", "WARDEN_PORT"];

    /// Pin every variable the loader reads so ambient values cannot leak in
    fn with_env<R>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let mut vars: Vec<(&str, Option<&str>)> = vec![
            ("AZURE_CONTENT_SAFETY_ENDPOINT", Some("https://safety.example.com")),
            ("AZURE_CONTENT_SAFETY_KEY", Some("safety-key")),
            ("OPENAI_API_KEY", Some("sk-test")),
        ];
        for name in OPTIONAL {
            vars.push((name, None));
        }
        for &(name, value) in overrides {
            vars.retain(|&(existing, _)| existing != name);
            vars.push((name, value));
        }
        temp_env::with_vars(vars, f)
    }

    #[test]
    fn test_from_env_defaults() {
        with_env(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.safety.endpoint, "https://safety.example.com");
            assert_eq!(config.safety.key, "safety-key");
            assert_eq!(config.relay.base_url, DEFAULT_RELAY_BASE_URL);
            assert_eq!(config.relay.api_key, "sk-test");
            assert_eq!(config.relay.model, DEFAULT_RELAY_MODEL);
            assert_eq!(config.server.host, DEFAULT_HOST);
            assert_eq!(config.server.port, DEFAULT_PORT);
        });
    }

    #[test]
    fn test_missing_required_var() {
        for name in REQUIRED {
            with_env(&[(name, None)], || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, WardenError::Config(_)));
                assert!(err.to_string().contains(name), "error should name {}", name);
            });
        }
    }

    #[test]
    fn test_optional_overrides() {
        with_env(
            &[
                ("OPENAI_BASE_URL", Some("http://localhost:9000/v1")),
                ("WARDEN_MODEL", Some("gpt-4o")),
                ("WARDEN_HOST", Some("127.0.0.1")),
                ("WARDEN_PORT", Some("9100")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.relay.base_url, "http://localhost:9000/v1");
                assert_eq!(config.relay.model, "gpt-4o");
                assert_eq!(config.server.host, "127.0.0.1");
                assert_eq!(config.server.port, 9100);
            },
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        with_env(
            &[
                ("AZURE_CONTENT_SAFETY_ENDPOINT", Some("https://safety.example.com/")),
                ("OPENAI_BASE_URL", Some("http://localhost:9000/v1/")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.safety.endpoint, "https://safety.example.com");
                assert_eq!(config.relay.base_url, "http://localhost:9000/v1");
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        with_env(&[("WARDEN_PORT", Some("not-a-port"))], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("WARDEN_PORT"));
        });
    }
}
