//! Component factory: builds AppComponents from config. Isolates assembly logic from the run modes.

use anyhow::{Context, Result};
use llm_client::{LlmClient, OpenAILlmClient};
use rate_resolver::{ExchangeRateApiProvider, RateProvider, RateResolver};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::assistant::{ChatAssistant, QueryParser};
use crate::chain::HandlerChain;
use crate::config::AppConfig;
use crate::core::Bot;
use crate::handlers::{ConversionHandler, LoggingHandler, MenuHandler};
use crate::telegram::{build_teloxide_bot, TelegramBotAdapter};

/// Shared dependencies for both run modes.
#[derive(Clone)]
pub struct AppComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outgoing side used by handlers; tests substitute a mock.
    pub bot: Arc<dyn Bot>,
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub resolver: RateResolver,
    pub llm: Option<Arc<dyn LlmClient>>,
    pub hosting_url: Option<String>,
}

/// Builds the teloxide bot, rate resolver and optional LLM client from config.
#[instrument(skip(config))]
pub fn build_components(config: &AppConfig) -> Result<AppComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let provider: Arc<dyn RateProvider> = Arc::new(
        ExchangeRateApiProvider::with_base_url(
            config.rates.api_key.clone(),
            config.rates.api_url.clone(),
        )
        .context("Failed to build rate provider client")?,
    );
    let resolver = RateResolver::new(provider);

    let llm: Option<Arc<dyn LlmClient>> = match &config.llm {
        Some(llm_config) => {
            info!(
                provider = ?llm_config.provider,
                model = %llm_config.model,
                "LLM enabled"
            );
            Some(Arc::new(OpenAILlmClient::from_config(llm_config)))
        }
        None => {
            warn!("No LLM API key set; free-text conversion and chat are disabled");
            None
        }
    };

    Ok(AppComponents {
        teloxide_bot,
        bot,
        bot_username: Arc::new(RwLock::new(None)),
        resolver,
        llm,
        hosting_url: config.base.hosting_url(),
    })
}

/// Builds the handler chain (logging → menu → conversion).
pub fn build_handler_chain(components: &AppComponents) -> HandlerChain {
    let menu = MenuHandler::new(
        components.bot.clone(),
        components.hosting_url.clone(),
        components.bot_username.clone(),
    );
    let conversion = ConversionHandler::new(
        components.bot.clone(),
        components.resolver.clone(),
        QueryParser::new(components.llm.clone()),
        ChatAssistant::new(components.llm.clone()),
    );
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(menu))
        .add_handler(Arc::new(conversion))
}
