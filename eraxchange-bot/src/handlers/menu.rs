//! `/start` and `/menu`: greeting plus a Web App button that opens the calculator.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::commands::Command;
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};

pub const MENU_GREETING: &str = "Привет! Я ваш помощник по обмену валют. Вы можете:\n\
1. Открыть мини-приложение для быстрой конвертации.\n\
2. Просто написать мне сумму и валюты (например: 100 долларов в тенге).\n\
3. Задать любой вопрос о валюте или обмене!";

pub const MENU_BUTTON_TEXT: &str = "🚀 Открыть Калькулятор Валют";

pub struct MenuHandler {
    bot: Arc<dyn Bot>,
    /// Mini-app URL; without it the greeting goes out as plain text.
    hosting_url: Option<String>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl MenuHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        hosting_url: Option<String>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            hosting_url,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for MenuHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        let Some(command) = Command::from_text(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        match self.hosting_url.as_deref() {
            Some(url) => {
                self.bot
                    .send_web_app_button(&message.chat, MENU_GREETING, MENU_BUTTON_TEXT, url)
                    .await?
            }
            None => {
                warn!("No public host configured; sending menu without Web App button");
                self.bot.send_message(&message.chat, MENU_GREETING).await?
            }
        }
        info!(chat_id = message.chat.id, command = ?command, "Menu sent");
        Ok(HandlerResponse::Reply(MENU_GREETING.to_string()))
    }
}
