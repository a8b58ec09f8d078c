//! Rate-quote provider: the external HTTP service returning all rates for one base currency.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::error::{RateError, Result};

/// Default provider endpoint (ExchangeRate-API v6).
pub const DEFAULT_PROVIDER_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Outbound request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider document for `latest/{BASE}`. Only the fields the resolver reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestRates {
    /// `"success"` on success; anything else (or missing) is a provider-side failure.
    #[serde(default)]
    pub result: String,
    /// Provider's error code when `result` is not `"success"` (e.g. `invalid-key`).
    #[serde(default, rename = "error-type")]
    pub error_type: Option<String>,
    /// Currency code to rate relative to the requested base.
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
}

impl LatestRates {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

/// Source of "latest rates for a base currency". Transport failures map to [`RateError::Network`];
/// interpreting the document is left to the resolver.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn latest(&self, base: &str) -> Result<LatestRates>;
}

/// [`RateProvider`] over HTTP: `GET {base_url}/{api_key}/latest/{BASE}`.
#[derive(Clone)]
pub struct ExchangeRateApiProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    /// Builds a provider for the default endpoint.
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_PROVIDER_URL.to_string())
    }

    /// Builds a provider for a custom endpoint (e.g. a mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    /// Like [`Self::with_base_url`] with an explicit whole-request timeout.
    pub fn with_timeout(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RateError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn latest_url(&self, base: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url, self.api_key, base)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(skip(self))]
    async fn latest(&self, base: &str) -> Result<LatestRates> {
        info!(base = %base, "Requesting latest rates");

        let response = self
            .http
            .get(self.latest_url(base))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                // reqwest errors carry the URL, which contains the API key
                let e = e.without_url();
                error!(base = %base, error = %e, "Rate provider request failed");
                RateError::Network(e.to_string())
            })?;

        response.json::<LatestRates>().await.map_err(|e| {
            let e = e.without_url();
            error!(base = %base, error = %e, "Rate provider returned an undecodable body");
            RateError::Network(e.to_string())
        })
    }
}
