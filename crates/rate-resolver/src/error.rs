//! Error taxonomy for rate lookups and conversion input.
//!
//! [`RateError`] is the tagged result of every failed lookup; [`ErrorKind`] is its stable,
//! string-free classification for callers that only need to branch on the kind.

use thiserror::Error;

/// Classified failure of a rate lookup or of caller-side input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// Transport failure talking to the provider (timeout, connection, non-2xx, undecodable body).
    #[error("Network error: {0}")]
    Network(String),

    /// Provider reachable but reported failure (or returned an unusable rate).
    #[error("Provider API error: {0}")]
    Api(String),

    /// The provider's response has no rate for the requested quote currency.
    #[error("Currency not found: {base} -> {quote}")]
    CurrencyNotFound { base: String, quote: String },

    /// Amount or request body rejected before reaching the resolver.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Kind of a [`RateError`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NetworkError,
    ApiError,
    CurrencyNotFound,
    InvalidInput,
}

impl ErrorKind {
    /// Wire name of the kind (`NETWORK_ERROR`, `API_ERROR`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "NETWORK_ERROR",
            ErrorKind::ApiError => "API_ERROR",
            ErrorKind::CurrencyNotFound => "CURRENCY_NOT_FOUND",
            ErrorKind::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RateError::Network(_) => ErrorKind::NetworkError,
            RateError::Api(_) => ErrorKind::ApiError,
            RateError::CurrencyNotFound { .. } => ErrorKind::CurrencyNotFound,
            RateError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Text shown to end users. Never includes the provider's own error text.
    pub fn user_message(&self) -> String {
        match self {
            RateError::Network(_) => "Ошибка сети. Проверьте подключение.".to_string(),
            RateError::Api(_) => "Ошибка внешнего API-сервиса.".to_string(),
            RateError::CurrencyNotFound { base, quote } => {
                format!("Курс {} к {} не найден.", base, quote)
            }
            RateError::InvalidInput(_) => "Неверная сумма".to_string(),
        }
    }
}

/// Result type for rate operations; uses [`RateError`].
pub type Result<T> = std::result::Result<T, RateError>;
