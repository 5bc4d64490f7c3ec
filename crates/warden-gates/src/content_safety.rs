//! Content safety gate backed by the text analyze API

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use warden_core::SafetyConfig;

use crate::{
    error::{GateError, Result},
    gate::Gate,
    types::{Category, TextAnalysis},
    verdict::{FailurePolicy, Verdict},
};

const API_VERSION: &str = "2024-09-01";

/// Severity at or above which a category is considered unsafe
pub const SEVERITY_THRESHOLD: u8 = 2;

/// Warning returned to the user when this gate blocks a message
pub const UNSAFE_CONTENT_WARNING: &str =
    "⚠️ Your message contains unsafe content and cannot be processed.";

/// Interface to the text analyze API
///
/// Implemented by [`ContentSafetyClient`]; tests substitute fakes.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Analyze a message and return per-category severities
    async fn analyze(&self, text: &str) -> Result<TextAnalysis>;
}

/// HTTP client for the text analyze endpoint
pub struct ContentSafetyClient {
    client: Client,
    endpoint: String,
    key: String,
}

impl ContentSafetyClient {
    /// Create a new client from the service credentials
    pub fn new(config: &SafetyConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(GateError::config("Content safety endpoint cannot be empty"));
        }
        if config.key.is_empty() {
            return Err(GateError::config("Content safety key cannot be empty"));
        }

        Ok(Self {
            // Connections are opened and released per call, not pooled
            client: Client::builder().pool_max_idle_per_host(0).build()?,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }
}

#[async_trait]
impl TextAnalyzer for ContentSafetyClient {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis> {
        let request = AnalyzeRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(format!(
                "{}/contentsafety/text:analyze?api-version={}",
                self.endpoint, API_VERSION
            ))
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| GateError::parse(e.to_string()))?;

        Ok(into_analysis(parsed))
    }
}

/// Screens messages for harmful content
///
/// A message is unsafe when any tracked category's severity is at or
/// above [`SEVERITY_THRESHOLD`]. Analysis failures block the message:
/// this gate fails closed.
pub struct ContentSafetyGate {
    analyzer: Arc<dyn TextAnalyzer>,
}

impl ContentSafetyGate {
    /// Create a gate over the given analyzer
    pub fn new(analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl Gate for ContentSafetyGate {
    fn name(&self) -> &str {
        "content_safety"
    }

    fn warning(&self) -> &str {
        UNSAFE_CONTENT_WARNING
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::FailClosed
    }

    async fn evaluate(&self, message: &str) -> Verdict {
        match self.analyzer.analyze(message).await {
            Ok(analysis) => match analysis.flagged(SEVERITY_THRESHOLD) {
                Some(category) => Verdict::Unsafe {
                    reason: format!(
                        "{} severity {} at or above threshold {}",
                        category.as_str(),
                        analysis.severity(category),
                        SEVERITY_THRESHOLD
                    ),
                },
                None => Verdict::Safe,
            },
            Err(e) => Verdict::Error {
                message: e.to_string(),
            },
        }
    }
}

fn into_analysis(response: AnalyzeResponse) -> TextAnalysis {
    let mut analysis = TextAnalysis::default();
    for item in response.categories_analysis {
        // Categories the service added after this client was written are skipped
        if let Some(category) = Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == item.category)
        {
            analysis.set(category, item.severity.unwrap_or(0));
        }
    }
    analysis
}

// Text analyze API types

#[derive(Debug, Serialize)]
struct AnalyzeRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(rename = "categoriesAnalysis", default)]
    categories_analysis: Vec<CategoryAnalysis>,
}

#[derive(Debug, Deserialize)]
struct CategoryAnalysis {
    category: String,
    #[serde(default)]
    severity: Option<u8>,
}
