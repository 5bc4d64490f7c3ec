//! OpenAI-compatible backend implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use warden_core::RelayConfig;

use crate::{
    backend::CompletionBackend,
    error::{RelayError, Result},
};

/// Backend for OpenAI-compatible chat completion APIs
pub struct OpenAIBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAIBackend {
    /// Create a new backend from the relay configuration
    pub fn new(config: &RelayConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(RelayError::config("API key cannot be empty"));
        }

        Ok(Self {
            // Connections are opened and released per call, not pooled
            client: Client::builder().pool_max_idle_per_host(0).build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAIBackend {
    async fn complete(&self, message: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: self.model.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: message.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| RelayError::parse(e.to_string()))?;

        let choice = parsed
            .choices
            .first()
            .ok_or_else(|| RelayError::parse("No choices in response"))?;

        Ok(choice.message.content.clone().unwrap_or_default())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIReply,
}

#[derive(Debug, Deserialize)]
struct OpenAIReply {
    #[serde(default)]
    content: Option<String>,
}
