//! Gemini backend over the Generative Language `generateContent` API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, prompts, GenerationOptions, ModelError, TextModel};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default Gemini model when `LLM_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiSystemInstruction<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiTextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction<'a> {
    parts: Vec<GeminiTextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiTextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GeminiResponse {
    /// Joins the text parts of the first candidate. `None` when there is no text at all.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.as_ref()?.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, ModelError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }

    fn request_body<'a>(prompt: &'a str, options: GenerationOptions) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiTextPart { text: prompt }],
            }],
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: prompts::LINKEDIN_WRITER_SYSTEM,
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl TextModel for GeminiClient {
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
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt, options))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        non_empty(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_name() {
        let client = GeminiClient::new(
            "k".to_string(),
            DEFAULT_GEMINI_MODEL.to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_uses_generation_config_names() {
        let options = GenerationOptions {
            temperature: 0.25,
            max_output_tokens: 2048,
        };
        let body = serde_json::to_value(GeminiClient::request_body("write", options)).unwrap();

        assert_eq!(body["generationConfig"]["temperature"], 0.25);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "write");
        assert!(body["systemInstruction"]["parts"][0]["text"].is_string());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "TITLE:\n"}, {"text": "Hello"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3}
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("TITLE:\nHello"));
    }

    #[test]
    fn test_blocked_response_has_no_text() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.text().is_none());

        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.text().is_none());
    }
}
