//! Extracts `{amount, from, to}` from free text ("100 долларов в тенге") via an LLM in JSON mode.
//!
//! The model's output is not trusted: [`parse_llm_json`] checks types and ranges and reports
//! anything malformed as [`ParseError::LlmParse`].

use llm_client::{ChatMessage, LlmClient};
use rate_resolver::number_from_json;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Source currency when the text names none.
pub const DEFAULT_FROM: &str = "USD";
/// Target currency when the text names none.
pub const DEFAULT_TO: &str = "KZT";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No LLM configured.
    #[error("LLM API key missing")]
    ApiKeyMissing,

    /// The LLM call itself failed.
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// The LLM answered, but not with a usable JSON object.
    #[error("LLM response could not be parsed: {0}")]
    LlmParse(String),
}

/// Validated extraction result. `amount == 0` means "not a conversion request".
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ParsedQuery {
    pub fn is_conversion(&self) -> bool {
        self.amount > 0.0
    }
}

/// Extraction prompt for `text`.
pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        r#"Задача: Извлечь числовую сумму (amount), исходную валюту (from) и целевую валюту (to) из текста.
Правила:
1. Ответ должен быть ТОЛЬКО в чистом JSON-формате, без дополнительного текста или пояснений.
2. Валюты должны быть в кодах ISO 4217 (USD, EUR, KZT, RUB и т.д.).
3. Если целевая валюта не указана, используй '{to}' по умолчанию.
4. Если сумма не найдена или текст не имеет отношения к конвертации, используй amount: 0.

Пример ожидаемого формата: {{ "amount": 100, "from": "USD", "to": "KZT" }}

Запрос пользователя: "{text}""#,
        to = DEFAULT_TO,
        text = text.replace('"', "'"),
    )
}

/// Removes a surrounding ```` ```json ```` / ```` ``` ```` fence if the model added one.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Reads an optional currency field; missing/null/empty falls back to `default`.
fn currency_field(obj: &serde_json::Map<String, Value>, key: &str, default: &str) -> Result<String, String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.trim().to_uppercase()),
        Some(other) => Err(format!("`{}` is not a string: {}", key, other)),
    }
}

/// Validates the model's JSON answer.
///
/// `amount`: number or numeric string, finite; missing or negative means 0. Currency codes are
/// upper-cased and must be 3 letters, but are only enforced for conversions (`amount > 0`);
/// otherwise bad codes are replaced by the defaults.
pub fn parse_llm_json(raw: &str) -> Result<ParsedQuery, ParseError> {
    let body = strip_code_fence(raw);
    let value: Value =
        serde_json::from_str(body).map_err(|e| ParseError::LlmParse(format!("invalid JSON: {}", e)))?;
    let obj = value
        .as_object()
        .ok_or_else(|| ParseError::LlmParse("expected a JSON object".to_string()))?;

    let amount = match obj.get("amount") {
        None | Some(Value::Null) => 0.0,
        Some(v) => number_from_json(v).map_err(|e| ParseError::LlmParse(e.to_string()))?,
    };
    if !amount.is_finite() {
        return Err(ParseError::LlmParse(format!("amount is not finite: {}", amount)));
    }
    let amount = amount.max(0.0);

    let from = currency_field(obj, "from", DEFAULT_FROM).map_err(ParseError::LlmParse)?;
    let to = currency_field(obj, "to", DEFAULT_TO).map_err(ParseError::LlmParse)?;

    if amount > 0.0 {
        for code in [&from, &to] {
            if !is_currency_code(code) {
                return Err(ParseError::LlmParse(format!("not a currency code: {:?}", code)));
            }
        }
        Ok(ParsedQuery { amount, from, to })
    } else {
        Ok(ParsedQuery {
            amount: 0.0,
            from: if is_currency_code(&from) { from } else { DEFAULT_FROM.to_string() },
            to: if is_currency_code(&to) { to } else { DEFAULT_TO.to_string() },
        })
    }
}

/// Free-text → [`ParsedQuery`] through an optional LLM.
#[derive(Clone)]
pub struct QueryParser {
    llm: Option<Arc<dyn LlmClient>>,
}

impl QueryParser {
    pub fn new(llm: Option<Arc<dyn LlmClient>>) -> Self {
        Self { llm }
    }

    pub fn is_enabled(&self) -> bool {
        self.llm.is_some()
    }

    #[instrument(skip(self, text))]
    pub async fn parse(&self, text: &str) -> Result<ParsedQuery, ParseError> {
        let llm = self.llm.as_ref().ok_or(ParseError::ApiKeyMissing)?;

        let messages = vec![ChatMessage::user(build_extraction_prompt(text))];
        let raw = llm.complete_json(messages).await.map_err(|e| {
            error!(error = %e, "LLM extraction request failed");
            ParseError::LlmApi(e.to_string())
        })?;

        let parsed = parse_llm_json(&raw).map_err(|e| {
            warn!(error = %e, raw = %raw, "LLM returned unusable extraction");
            e
        })?;
        info!(
            amount = parsed.amount,
            from = %parsed.from,
            to = %parsed.to,
            "Query parsed"
        );
        Ok(parsed)
    }
}
