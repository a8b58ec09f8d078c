//! General chat fallback for messages that are not conversion requests.

use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{error, instrument};

/// Role and tone for free-form answers.
pub const CHAT_SYSTEM_PROMPT: &str = "Ты — дружелюбный и компетентный ассистент по обмену валют для мобильного приложения \
'Currency Exchange Assistant'. Твоя цель — помогать пользователям с общими вопросами о валюте, \
обмене и рекламировать удобство приложения. Отвечай кратко и информативно.";

const UNAVAILABLE_REPLY: &str = "Извините, функция чата недоступна из-за отсутствия ключа ИИ.";
const FAILURE_REPLY: &str = "Извините, произошла ошибка связи с ИИ-сервисом.";

#[derive(Clone)]
pub struct ChatAssistant {
    llm: Option<Arc<dyn LlmClient>>,
}

impl ChatAssistant {
    pub fn new(llm: Option<Arc<dyn LlmClient>>) -> Self {
        Self { llm }
    }

    /// Answers `text`. Never fails: LLM absence or errors become a fixed apology. May return an
    /// empty string if the model answered with nothing.
    #[instrument(skip(self, text))]
    pub async fn reply(&self, text: &str) -> String {
        let Some(llm) = self.llm.as_ref() else {
            return UNAVAILABLE_REPLY.to_string();
        };

        let messages = vec![ChatMessage::system(CHAT_SYSTEM_PROMPT), ChatMessage::user(text)];
        match llm.complete(messages).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                error!(error = %e, "Chat completion failed");
                FAILURE_REPLY.to_string()
            }
        }
    }
}
