// src/llm/provider.rs
// LLM provider abstraction

use anyhow::Result;
use async_trait::async_trait;

use super::{ChatRequest, ChatResponse};

/// Trait for chat completion clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a chat completion request
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Model used when the caller does not name one
    fn default_model(&self) -> &str;
}
