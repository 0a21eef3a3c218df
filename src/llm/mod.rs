// src/llm/mod.rs
//! One-shot chat completion helper.

pub mod config;
pub mod openai;
pub mod provider;
pub mod types;

use anyhow::{Result, anyhow};
use tracing::info;

pub use config::ClientConfig;
pub use openai::OpenAIClient;
pub use provider::LlmClient;
pub use types::{ChatRequest, ChatResponse, Message, ResponseChoice, Role, Usage};

/// Send `prompt` as a single user message and return the completion text.
///
/// Uses `model` when given, otherwise the client's default model. Transport,
/// status and decoding failures from the client are returned as-is.
pub async fn llm_call(client: &dyn LlmClient, prompt: &str, model: Option<&str>) -> Result<String> {
    let model = model.unwrap_or_else(|| client.default_model()).to_string();
    info!("LLM call: model={}, prompt_chars={}", model, prompt.len());

    let request = ChatRequest::new(model, vec![Message::user(prompt)]);
    let response = client.chat(request).await?;

    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("No content in chat completion response"))
}
