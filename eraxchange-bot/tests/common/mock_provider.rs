//! In-process [`RateProvider`] with fixed rates per base currency.

use async_trait::async_trait;
use rate_resolver::{LatestRates, RateError, RateProvider, RateResolver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub enum Behavior {
    /// Successful document with these rates, for any base.
    Rates(HashMap<String, f64>),
    /// `{"result":"error"}`.
    ApiFailure,
    /// Transport failure.
    Unreachable,
}

pub struct StaticProvider {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    /// Success with the given `(code, rate)` pairs.
    pub fn with_rates(rates: &[(&str, f64)]) -> Arc<Self> {
        Self::new(Behavior::Rates(
            rates.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
        ))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StaticProvider {
    async fn latest(&self, _base: &str) -> Result<LatestRates, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Rates(rates) => Ok(LatestRates {
                result: "success".to_string(),
                error_type: None,
                conversion_rates: rates.clone(),
            }),
            Behavior::ApiFailure => Ok(LatestRates {
                result: "error".to_string(),
                error_type: Some("invalid-key".to_string()),
                conversion_rates: HashMap::new(),
            }),
            Behavior::Unreachable => Err(RateError::Network("connection refused".to_string())),
        }
    }
}

pub fn resolver_for(provider: Arc<StaticProvider>) -> RateResolver {
    RateResolver::new(provider)
}
