//! LLM configuration loaded from environment variables.
//!
//! The key is optional for the application as a whole: [`LlmConfig::from_env`] returns `None`
//! when no key is set, and the bot then runs without free-text parsing and chat.

use std::env;

/// Default OpenAI base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Gemini's OpenAI-compatible endpoint.
pub const GEMINI_OPENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Which provider the key belongs to; picks default base URL and model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAI,
    Gemini,
}

impl LlmProvider {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => OPENAI_BASE_URL,
            LlmProvider::Gemini => GEMINI_OPENAI_BASE_URL,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => "gpt-4o-mini",
            LlmProvider::Gemini => "gemini-2.5-flash",
        }
    }
}

/// Resolved LLM connection settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl LlmConfig {
    /// Loads from env: `LLM_API_KEY` or `OPENAI_API_KEY` (OpenAI defaults), else `GEMINI_API_KEY`
    /// (Gemini defaults). `LLM_BASE_URL` and `LLM_MODEL` override the defaults.
    /// Returns `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        let (provider, api_key) = if let Some(key) = non_empty("LLM_API_KEY") {
            (LlmProvider::OpenAI, key)
        } else if let Some(key) = non_empty("OPENAI_API_KEY") {
            (LlmProvider::OpenAI, key)
        } else if let Some(key) = non_empty("GEMINI_API_KEY") {
            (LlmProvider::Gemini, key)
        } else {
            return None;
        };

        let base_url =
            non_empty("LLM_BASE_URL").unwrap_or_else(|| provider.default_base_url().to_string());
        let model = non_empty("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_string());

        Some(Self {
            provider,
            api_key,
            base_url,
            model,
        })
    }
}
