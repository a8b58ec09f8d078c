//! Free-text handler: LLM extraction → rate conversion, or chat fallback for everything else.

use async_trait::async_trait;
use rate_resolver::{format_grouped, Conversion, RateResolver};
use tracing::{error, info, instrument, warn};

use crate::assistant::{ChatAssistant, ParseError, QueryParser};
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;

pub const MSG_AI_UNAVAILABLE: &str = "❌ Функции ИИ недоступны.";
pub const MSG_PARSE_FAILED: &str = "Извините, произошла ошибка связи с ИИ-сервисом или не удалось разобрать ответ. Попробуйте перефразировать.";
pub const MSG_EMPTY_CHAT_REPLY: &str = "Извините, я не смог ответить. Возможно, произошла ошибка ИИ.";

/// Markdown reply for a successful conversion.
pub fn format_conversion_reply(c: &Conversion) -> String {
    format!(
        "🤖 Расчет по запросу:\n*{} {}* = *{} {}*\nТекущий курс: 1 {} = {} {}",
        format_grouped(c.amount, 2),
        c.from,
        format_grouped(c.result, 2),
        c.to,
        c.from,
        format_grouped(c.rate, 4),
        c.to,
    )
}

fn rate_failure_message(from: &str, to: &str) -> String {
    format!("❌ Не удалось получить курс для {} к {}.", from, to)
}

pub struct ConversionHandler {
    bot: Arc<dyn Bot>,
    resolver: RateResolver,
    parser: QueryParser,
    chat: ChatAssistant,
}

impl ConversionHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        resolver: RateResolver,
        parser: QueryParser,
        chat: ChatAssistant,
    ) -> Self {
        Self {
            bot,
            resolver,
            parser,
            chat,
        }
    }

    async fn reply_text(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.send_message(&message.chat, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for ConversionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() || message.is_command() {
            return Ok(HandlerResponse::Continue);
        }

        if !self.parser.is_enabled() {
            return self.reply_text(message, MSG_AI_UNAVAILABLE.to_string()).await;
        }

        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, "Failed to send typing action");
        }

        let query = match self.parser.parse(text).await {
            Ok(q) => q,
            Err(ParseError::ApiKeyMissing) => {
                return self.reply_text(message, MSG_AI_UNAVAILABLE.to_string()).await;
            }
            Err(e @ (ParseError::LlmApi(_) | ParseError::LlmParse(_))) => {
                warn!(error = %e, "Could not extract conversion parameters");
                return self.reply_text(message, MSG_PARSE_FAILED.to_string()).await;
            }
        };

        if query.is_conversion() {
            return match self.resolver.convert(query.amount, &query.from, &query.to).await {
                Ok(conversion) => {
                    let reply = format_conversion_reply(&conversion);
                    if let Err(e) = self.bot.send_markdown(&message.chat, &reply).await {
                        warn!(error = %e, "Markdown reply rejected, resending as plain text");
                        self.bot.send_message(&message.chat, &reply).await?;
                    }
                    info!(
                        chat_id = message.chat.id,
                        from = %conversion.from,
                        to = %conversion.to,
                        rate = conversion.rate,
                        "Conversion sent"
                    );
                    Ok(HandlerResponse::Reply(reply))
                }
                Err(e) => {
                    error!(error = %e, kind = %e.kind(), "Rate lookup failed");
                    self.reply_text(message, rate_failure_message(&query.from, &query.to))
                        .await
                }
            };
        }

        let answer = self.chat.reply(text).await;
        let answer = if answer.is_empty() {
            MSG_EMPTY_CHAT_REPLY.to_string()
        } else {
            answer
        };
        self.reply_text(message, answer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conversion_reply() {
        let c = Conversion {
            amount: 100.0,
            from: "USD".into(),
            to: "KZT".into(),
            rate: 450.0,
            result: 45000.0,
        };
        assert_eq!(
            format_conversion_reply(&c),
            "🤖 Расчет по запросу:\n*100.00 USD* = *45,000.00 KZT*\nТекущий курс: 1 USD = 450.0000 KZT"
        );
    }

    #[test]
    fn test_rate_failure_message() {
        assert_eq!(
            rate_failure_message("USD", "XYZ"),
            "❌ Не удалось получить курс для USD к XYZ."
        );
    }
}
