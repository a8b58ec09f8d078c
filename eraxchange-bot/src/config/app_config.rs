//! AppConfig: BaseConfig + RatesConfig + optional LlmConfig. Use load() for env-based loading.

use anyhow::Result;
use llm_client::LlmConfig;

use super::{BaseConfig, RatesConfig};

/// Full application config. Use [`AppConfig::load`] then [`AppConfig::validate`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub rates: RatesConfig,
    /// None when no LLM key is configured; free-text parsing and chat are then disabled.
    pub llm: Option<LlmConfig>,
}

impl AppConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the env token.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let rates = RatesConfig::from_env()?;
        let llm = LlmConfig::from_env();
        Ok(Self { base, rates, llm })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.rates.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn llm_enabled(&self) -> bool {
        self.llm.is_some()
    }
}
