//! Caller-side amount validation.

use serde_json::Value;

use crate::error::{RateError, Result};

/// A validated conversion amount: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RateError::InvalidInput(format!("amount is not finite: {}", value)));
        }
        if value <= 0.0 {
            return Err(RateError::InvalidInput(format!("amount must be positive: {}", value)));
        }
        Ok(Self(value))
    }

    /// Accepts a JSON number or a numeric string (`"100"`, `" 12.5 "`).
    pub fn parse_json(value: &Value) -> Result<Self> {
        Self::new(number_from_json(value)?)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Reads a float from a JSON number or numeric string without range checks.
pub fn number_from_json(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| RateError::InvalidInput(format!("unrepresentable number: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| RateError::InvalidInput(format!("not a number: {:?}", s))),
        other => Err(RateError::InvalidInput(format!("not a number: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        assert_eq!(Amount::parse_json(&json!(100)).unwrap().value(), 100.0);
        assert_eq!(Amount::parse_json(&json!(0.5)).unwrap().value(), 0.5);
        assert_eq!(Amount::parse_json(&json!(" 12.5 ")).unwrap().value(), 12.5);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(Amount::parse_json(&json!(0)).is_err());
        assert!(Amount::parse_json(&json!(-5)).is_err());
        assert!(Amount::parse_json(&json!("-1")).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_and_non_finite() {
        assert!(Amount::parse_json(&json!("abc")).is_err());
        assert!(Amount::parse_json(&json!(null)).is_err());
        assert!(Amount::parse_json(&json!([1])).is_err());
        assert!(Amount::parse_json(&json!("inf")).is_err());
        assert!(Amount::parse_json(&json!("NaN")).is_err());
    }

    #[test]
    fn test_error_kind_is_invalid_input() {
        let err = Amount::parse_json(&json!("abc")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
    }
}
