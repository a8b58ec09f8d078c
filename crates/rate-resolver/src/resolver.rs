//! Rate Resolver: cached lookup of one exchange rate, and conversion on top of it.

use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheEntry, PairKey, RateCache};
use crate::clock::{Clock, SystemClock};
use crate::error::{RateError, Result};
use crate::provider::RateProvider;

/// How long a fetched rate is served from cache.
pub const CACHE_EXPIRY_SECS: i64 = 3600;

/// Result of [`RateResolver::convert`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub result: f64,
}

/// Resolves rates through a shared [`RateCache`], calling the provider only on a miss.
///
/// Cloning is cheap; clones share the same cache and provider. Concurrent misses for the same
/// pair may each call the provider; the last successful write wins.
#[derive(Clone)]
pub struct RateResolver {
    provider: Arc<dyn RateProvider>,
    cache: Arc<RateCache>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl RateResolver {
    /// Creates a resolver with an empty cache, the wall clock, and the default expiry.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_clock(provider, Arc::new(SystemClock))
    }

    /// Creates a resolver with a custom time source.
    pub fn with_clock(provider: Arc<dyn RateProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider,
            cache: Arc::new(RateCache::new()),
            clock,
            ttl: Duration::seconds(CACHE_EXPIRY_SECS),
        }
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    /// Returns the rate of `quote` per one unit of `base`.
    ///
    /// Codes are upper-cased but not validated. A fresh cache entry is returned without a
    /// network call; otherwise the provider is called once (no retries) and, on success only,
    /// the entry for the pair is overwritten.
    #[instrument(skip(self))]
    pub async fn resolve_rate(&self, base: &str, quote: &str) -> Result<f64> {
        let key = PairKey::new(base, quote);

        if let Some(rate) = self.cache.get_fresh(&key, self.clock.now(), self.ttl).await {
            debug!(pair = %key, rate = rate, "Rate cache hit");
            return Ok(rate);
        }

        let document = self.provider.latest(key.base()).await?;

        if !document.is_success() {
            warn!(
                pair = %key,
                result = %document.result,
                error_type = ?document.error_type,
                "Rate provider reported failure"
            );
            return Err(RateError::Api(
                document
                    .error_type
                    .unwrap_or_else(|| format!("result={}", document.result)),
            ));
        }

        let rate = match document.conversion_rates.get(key.quote()) {
            Some(rate) => *rate,
            None => {
                warn!(pair = %key, "Quote currency missing from provider response");
                return Err(RateError::CurrencyNotFound {
                    base: key.base().to_string(),
                    quote: key.quote().to_string(),
                });
            }
        };

        if !rate.is_finite() || rate <= 0.0 {
            warn!(pair = %key, rate = rate, "Provider returned an unusable rate");
            return Err(RateError::Api(format!("unusable rate {} for {}", rate, key)));
        }

        let fetched_at = self.clock.now();
        info!(pair = %key, rate = rate, "Rate fetched and cached");
        self.cache.insert(key, CacheEntry { rate, fetched_at }).await;

        Ok(rate)
    }

    /// Converts `amount` of `base` into `quote`. `amount` is expected to be validated by the caller.
    pub async fn convert(&self, amount: f64, base: &str, quote: &str) -> Result<Conversion> {
        let rate = self.resolve_rate(base, quote).await?;
        Ok(Conversion {
            amount,
            from: base.trim().to_uppercase(),
            to: quote.trim().to_uppercase(),
            rate,
            result: amount * rate,
        })
    }
}

// Behavioral tests (cache expiry, error classification) live in tests/resolver_test.rs
