//! `POST /api/exchange` request validation and response bodies.

use rate_resolver::{format_grouped, number_from_json, Amount, Conversion};
use serde::Serialize;
use serde_json::Value;

use super::{MSG_BAD_AMOUNT, MSG_BAD_FORMAT};
use crate::assistant::{DEFAULT_FROM, DEFAULT_TO};

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRequest {
    pub amount: Amount,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub success: bool,
    pub result: String,
    pub rate: String,
    pub from: String,
    pub to: String,
}

impl From<Conversion> for ExchangeResponse {
    fn from(c: Conversion) -> Self {
        Self {
            success: true,
            result: format_grouped(c.result, 2),
            rate: format_grouped(c.rate, 4),
            from: c.from,
            to: c.to,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn currency(obj: &serde_json::Map<String, Value>, key: &str, default: &str) -> Result<String, &'static str> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.trim().to_uppercase()),
        Some(_) => Err(MSG_BAD_FORMAT),
    }
}

/// Validates the JSON body. The error is the user-facing 400 message.
///
/// A non-numeric amount or non-string currency is a format error; a missing, zero, negative or
/// non-finite amount is an amount error.
pub fn parse_exchange_request(body: &Value) -> Result<ExchangeRequest, &'static str> {
    let obj = body.as_object().ok_or(MSG_BAD_FORMAT)?;

    let amount = match obj.get("amount") {
        None | Some(Value::Null) => return Err(MSG_BAD_AMOUNT),
        Some(v) => number_from_json(v).map_err(|_| MSG_BAD_FORMAT)?,
    };
    let amount = Amount::new(amount).map_err(|_| MSG_BAD_AMOUNT)?;

    Ok(ExchangeRequest {
        amount,
        from: currency(obj, "from", DEFAULT_FROM)?,
        to: currency(obj, "to", DEFAULT_TO)?,
    })
}
