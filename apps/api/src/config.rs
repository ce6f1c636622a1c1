use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::gemini::DEFAULT_GEMINI_MODEL;
use crate::llm_client::DEFAULT_ANTHROPIC_MODEL;

/// Which hosted model provider backs generation and refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Anthropic,
    Gemini,
}

impl LlmProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "anthropic",
            LlmProvider::Gemini => "gemini",
        }
    }

    fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
            LlmProvider::Gemini => "GEMINI_API_KEY",
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            LlmProvider::Anthropic => DEFAULT_ANTHROPIC_MODEL,
            LlmProvider::Gemini => DEFAULT_GEMINI_MODEL,
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" | "claude" => Ok(LlmProvider::Anthropic),
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            other => bail!("LLM_PROVIDER must be 'anthropic' or 'gemini', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the selected provider's API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_provider: LlmProvider,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup so parsing can be tested without
    /// touching the process environment.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let llm_provider: LlmProvider = get("LLM_PROVIDER")
            .unwrap_or_else(|| "anthropic".to_string())
            .parse()?;

        let key_var = llm_provider.api_key_var();
        let llm_api_key = get(key_var)
            .filter(|v| !v.trim().is_empty())
            .with_context(|| format!("Required environment variable '{key_var}' is not set"))?;

        Ok(Config {
            llm_provider,
            llm_api_key,
            llm_model: get("LLM_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| llm_provider.default_model().to_string()),
            llm_timeout_secs: get("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
