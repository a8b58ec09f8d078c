//! Telegram layer: message adapters, Bot implementation, polling runner, webhook glue.

mod adapters;
mod bot_adapter;
mod runner;
mod webhook;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::{fetch_bot_username, register_commands, run_polling};
pub use webhook::{dispatch_update, register_webhook};
