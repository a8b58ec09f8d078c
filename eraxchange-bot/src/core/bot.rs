//! Bot abstraction for outgoing messages.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests
//! substitute a recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::Chat;

/// Outgoing side of the bot: everything handlers may send to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message rendered with Telegram's (legacy) Markdown.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message with one inline button that opens `url` as a Web App.
    async fn send_web_app_button(
        &self,
        chat: &Chat,
        text: &str,
        button_text: &str,
        url: &str,
    ) -> Result<()>;
    /// Shows the "typing…" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
