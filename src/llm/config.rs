// src/llm/config.rs
// Configuration for the chat completions client

use anyhow::Result;

use crate::config::{DEFAULT_LLM_MODEL, DEFAULT_LLM_TIMEOUT_SECS, DEFAULT_OPENAI_BASE_URL};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: String, base_url: String, model: String, timeout_secs: u64) -> Self {
        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }

    /// Config with defaults for everything but the credential
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Get API key for authentication
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get default model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "API key cannot be empty (set OPENAI_API_KEY)"
            ));
        }

        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("Base URL cannot be empty"));
        }

        if self.model.is_empty() {
            return Err(anyhow::anyhow!("Model cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Timeout must be at least one second"));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}
