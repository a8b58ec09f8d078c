//! Error types for the bot core.
//!
//! [`XchangeError`] is the error for handlers, the chain and the Telegram adapter. Rate and
//! parse failures are answered inside the handlers, so only transport failures surface here.

use thiserror::Error;

/// Outgoing-transport failure (Telegram API rejected or unreachable).
#[derive(Error, Debug)]
pub enum XchangeError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`XchangeError`].
pub type Result<T> = std::result::Result<T, XchangeError>;
