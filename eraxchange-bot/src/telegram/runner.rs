//! Polling runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use crate::chain::HandlerChain;
use crate::commands::Command;
use crate::core::ToCoreMessage;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Calls getMe and stores the bot's username (used to match `/cmd@username`). Failures are logged only.
pub async fn fetch_bot_username(
    bot: &teloxide::Bot,
    bot_username: &Arc<tokio::sync::RwLock<Option<String>>>,
) {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; command suffixes will not be checked"),
    }
}

/// Registers /start and /menu in the Telegram client's command list. Failures are logged only.
pub async fn register_commands(bot: &teloxide::Bot) {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "setMyCommands failed");
    }
}

/// Long-polls Telegram. Removes any webhook first (Telegram refuses getUpdates while one is set),
/// then dispatches each message to the chain in its own task.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_polling(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    if let Err(e) = bot.delete_webhook().await {
        error!(error = %e, "Failed to remove webhook before polling");
    }
    fetch_bot_username(&bot, &bot_username).await;
    register_commands(&bot).await;

    info!("Bot started in polling mode");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            // Run the chain in a spawned task so the REPL returns immediately
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
