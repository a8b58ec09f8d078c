//! Rate provider config: API key and endpoint.

use anyhow::Result;
use rate_resolver::DEFAULT_PROVIDER_URL;
use std::env;

#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// EXCHANGE_RATE_API_KEY
    pub api_key: String,
    /// EXCHANGE_RATE_API_URL, default ExchangeRate-API v6
    pub api_url: String,
}

impl RatesConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("EXCHANGE_RATE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("EXCHANGE_RATE_API_KEY not set"))?;
        let api_url =
            env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());
        Ok(Self { api_key, api_url })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("EXCHANGE_RATE_API_URL is not a valid URL: {}", self.api_url);
        }
        Ok(())
    }
}
