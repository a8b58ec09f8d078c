//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{Bot as CoreBot, Chat, Result, XchangeError};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, WebAppInfo,
};

/// Builds a teloxide Bot, pointed at `api_url` when set (e.g. a mock server in tests).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> anyhow::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .map_err(|e| anyhow::anyhow!("Invalid Telegram API URL {}: {}", url, e))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

fn bot_error(e: impl std::fmt::Display) -> XchangeError {
    XchangeError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_web_app_button(
        &self,
        chat: &Chat,
        text: &str,
        button_text: &str,
        url: &str,
    ) -> Result<()> {
        let url = reqwest::Url::parse(url).map_err(bot_error)?;
        let markup = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
            button_text.to_string(),
            WebAppInfo { url },
        )]]);
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(markup)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_teloxide_bot_rejects_bad_api_url() {
        assert!(build_teloxide_bot("1:a", Some("not a url")).is_err());
        assert!(build_teloxide_bot("1:a", Some("http://localhost:8081")).is_ok());
        assert!(build_teloxide_bot("1:a", None).is_ok());
    }
}
