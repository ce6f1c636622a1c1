/// LLM Client — the single point of entry for all model calls in the SARI API.
///
/// ARCHITECTURAL RULE: No other module may talk to a model provider directly.
/// Generation and refinement depend on the `TextModel` trait only.
///
/// One request, one response. No streaming and no retries: a failed call
/// surfaces to the caller as a single `ModelError`.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, LlmProvider};

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Default Anthropic model when `LLM_MODEL` is not set.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Model returned an empty refinement")]
    EmptyRefinement,
}

/// Sampling options forwarded to the provider on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// A hosted text-generation model.
///
/// Implementations return the model's text or a `ModelError`; a missing or
/// whitespace-only reply is `ModelError::EmptyResponse`, never `Ok("")`.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn invoke(&self, prompt: &str, options: GenerationOptions)
        -> Result<String, ModelError>;
}

/// Builds the provider client selected in config.
pub fn build_model(config: &Config) -> Result<Arc<dyn TextModel>, ModelError> {
    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let model: Arc<dyn TextModel> = match config.llm_provider {
        LlmProvider::Anthropic => Arc::new(AnthropicClient::new(
            config.llm_api_key.clone(),
            config.llm_model.clone(),
            timeout,
        )?),
        LlmProvider::Gemini => Arc::new(GeminiClient::new(
            config.llm_api_key.clone(),
            config.llm_model.clone(),
            timeout,
        )?),
    };
    Ok(model)
}

/// Rejects whitespace-only text so callers never see an empty success.
fn non_empty(text: Option<String>) -> Result<String, ModelError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ModelError::EmptyResponse),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic Messages API
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl AnthropicResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Claude client over the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, ModelError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
        })
    }

    fn request_body<'a>(
        &'a self,
        prompt: &'a str,
        options: GenerationOptions,
    ) -> AnthropicRequest<'a> {
        AnthropicRequest {
            model: &self.model,
            max_tokens: options.max_output_tokens,
            temperature: options.temperature,
            system: prompts::LINKEDIN_WRITER_SYSTEM,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[async_trait]
impl TextModel for AnthropicClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn invoke(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, ModelError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.request_body(prompt, options))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnthropicResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Anthropic call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        non_empty(parsed.text().map(str::to_owned))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────
