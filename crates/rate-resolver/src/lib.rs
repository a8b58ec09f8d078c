//! # rate-resolver
//!
//! Exchange-rate lookup for the conversion bot and web app: [`RateResolver`] answers
//! "how many `quote` per one `base`", serving repeated queries from a per-pair [`RateCache`]
//! for [`CACHE_EXPIRY_SECS`] and otherwise calling a [`RateProvider`] once.
//! Failures are classified as [`RateError`] (`NETWORK_ERROR`, `API_ERROR`, `CURRENCY_NOT_FOUND`,
//! or caller-side `INVALID_INPUT`).

pub mod amount;
pub mod cache;
pub mod clock;
pub mod error;
pub mod format;
pub mod provider;
pub mod resolver;

pub use amount::{number_from_json, Amount};
pub use cache::{CacheEntry, PairKey, RateCache};
pub use clock::{Clock, SystemClock};
pub use error::{ErrorKind, RateError, Result};
pub use format::format_grouped;
pub use provider::{
    ExchangeRateApiProvider, LatestRates, RateProvider, DEFAULT_PROVIDER_URL, REQUEST_TIMEOUT,
};
pub use resolver::{Conversion, RateResolver, CACHE_EXPIRY_SECS};
