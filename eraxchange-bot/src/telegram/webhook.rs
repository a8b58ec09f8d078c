//! Webhook glue: registering the webhook URL and dispatching decoded updates.

use crate::chain::HandlerChain;
use crate::core::{HandlerResponse, ToCoreMessage};
use anyhow::{Context, Result};
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::{Update, UpdateKind};
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Replaces the bot's webhook with `webhook_url` (delete, short pause, set).
#[instrument(skip(bot, webhook_url))]
pub async fn register_webhook(bot: &teloxide::Bot, webhook_url: &str) -> Result<()> {
    let url = reqwest::Url::parse(webhook_url).context("Invalid webhook URL")?;

    bot.delete_webhook()
        .await
        .context("Failed to delete existing webhook")?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    let host = url.host_str().unwrap_or_default().to_string();
    bot.set_webhook(url).await.context("Failed to set webhook")?;

    // the URL path is the bot token; log the host only
    info!(host = %host, "Webhook set");
    Ok(())
}

/// Runs the chain for a message update. Other update kinds are acknowledged and ignored.
/// Chain errors are logged, never returned: Telegram must still get 200 so it does not redeliver.
pub async fn dispatch_update(chain: &HandlerChain, update: Update) -> Option<HandlerResponse> {
    let msg = match update.kind {
        UpdateKind::Message(msg) => msg,
        _ => {
            debug!(update_id = update.id.0, "Ignoring non-message update");
            return None;
        }
    };

    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_type = %core_msg.message_type,
        "Received message via webhook"
    );

    match chain.handle(&core_msg).await {
        Ok(response) => Some(response),
        Err(e) => {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            None
        }
    }
}
