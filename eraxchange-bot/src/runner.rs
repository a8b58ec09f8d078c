//! Run modes: long polling, or HTTP server with webhook registration.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::components::{build_components, build_handler_chain};
use crate::config::AppConfig;
use crate::core::init_tracing;
use crate::telegram::{fetch_bot_username, register_commands, register_webhook, run_polling};
use crate::web::{build_router, serve, AppState};

fn init(config: &AppConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;
    info!(
        llm_enabled = config.llm_enabled(),
        public_host = ?config.base.public_host,
        "Configuration loaded"
    );
    Ok(())
}

/// Main entry for `poll`: init logging, validate config, build components, then long-poll.
#[instrument(skip(config))]
pub async fn run_polling_mode(config: AppConfig) -> Result<()> {
    init(&config)?;
    let components = build_components(&config)?;
    let chain = build_handler_chain(&components);

    run_polling(components.teloxide_bot, chain, components.bot_username).await
}

/// Main entry for `serve`: binds the HTTP surface and, unless `register` is false, points the
/// Telegram webhook at `https://{public_host}/{token}`.
#[instrument(skip(config))]
pub async fn run_server_mode(config: AppConfig, register: bool) -> Result<()> {
    init(&config)?;
    let components = build_components(&config)?;
    let chain = build_handler_chain(&components);

    fetch_bot_username(&components.teloxide_bot, &components.bot_username).await;

    if register {
        let webhook_url = config
            .base
            .webhook_url()
            .context("PUBLIC_HOST (or RENDER_EXTERNAL_HOSTNAME) is required to register the webhook")?;
        register_commands(&components.teloxide_bot).await;
        register_webhook(&components.teloxide_bot, &webhook_url).await?;
    } else {
        warn!("Webhook registration skipped");
    }

    let state = Arc::new(AppState {
        resolver: components.resolver.clone(),
        chain,
        bot_token: config.bot_token().to_string(),
    });
    serve(&config.base.listen_addr(), build_router(state)).await
}
