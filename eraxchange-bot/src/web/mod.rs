//! HTTP surface: mini-app page, conversion API, Telegram webhook, health check.

mod exchange;
mod routes;
mod server;

pub use exchange::{parse_exchange_request, ErrorResponse, ExchangeRequest, ExchangeResponse};
pub use routes::{build_router, AppState};
pub use server::serve;

/// 400 body text for a request that is not a `{amount, from, to}` object.
pub const MSG_BAD_FORMAT: &str = "Неверный формат данных";
/// 400 body text for a missing, zero or negative amount.
pub const MSG_BAD_AMOUNT: &str = "Неверная сумма";
