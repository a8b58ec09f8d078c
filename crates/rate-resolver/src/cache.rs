//! Per-pair rate cache.
//!
//! One entry per [`PairKey`]; a new fetch overwrites the previous entry. Entries are never
//! evicted: stale ones are bypassed on read and replaced on the next successful fetch.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Ordered (base, quote) pair, both upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    base: String,
    quote: String,
}

impl PairKey {
    /// Normalizes both codes (trimmed, upper-cased). Does not check that they are real currencies.
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            quote: quote.trim().to_uppercase(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}

/// A previously fetched rate: units of quote per one unit of base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    pub rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// True while `now - fetched_at < ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

/// Process-wide rate cache, shared by every caller of the resolver.
#[derive(Debug, Default)]
pub struct RateCache {
    entries: RwLock<HashMap<PairKey, CacheEntry>>,
}

impl RateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached rate for `key` if it is still fresh at `now`.
    pub async fn get_fresh(&self, key: &PairKey, now: DateTime<Utc>, ttl: Duration) -> Option<f64> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, ttl))
            .map(|entry| entry.rate)
    }

    /// Returns the entry for `key` regardless of age.
    pub async fn get(&self, key: &PairKey) -> Option<CacheEntry> {
        self.entries.read().await.get(key).copied()
    }

    /// Stores `entry` for `key`, replacing any previous one.
    pub async fn insert(&self, key: PairKey, entry: CacheEntry) {
        self.entries.write().await.insert(key, entry);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
