// src/llm/openai.rs

//! Chat completions client for OpenAI-compatible endpoints.
//! Plain reqwest, one request per call: no retries and no streaming.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ChatRequest, ChatResponse, ClientConfig, LlmClient};

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAIClient {
    /// Build a client from explicit settings. Fails if the settings are invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        info!(
            "Initializing OpenAI client: model={}, base_url={}",
            config.model(),
            config.base_url()
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let request_id = Uuid::new_v4();
        let url = self.config.chat_completions_url();

        debug!(
            request_id = %request_id,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error {}: {}", status, body));
        }

        let response: ChatResponse = resp.json().await?;
        debug!(
            request_id = %request_id,
            choices = response.choices.len(),
            "Received chat completion response"
        );

        Ok(response)
    }

    fn default_model(&self) -> &str {
        self.config.model()
    }
}
