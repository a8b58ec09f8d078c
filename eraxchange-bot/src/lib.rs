//! # eraxchange bot
//!
//! Currency-conversion Telegram bot with a web mini-app. Messages flow through a
//! [`HandlerChain`] (logging → `/start`·`/menu` → free-text conversion); rates come from a
//! cached [`rate_resolver::RateResolver`] shared with the `/api/exchange` HTTP endpoint.

pub mod assistant;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;
pub mod web;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, Chat, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User, XchangeError,
};

pub use chain::HandlerChain;
pub use commands::Command;
pub use components::{build_components, build_handler_chain, AppComponents};
pub use config::{AppConfig, BaseConfig, RatesConfig};
pub use handlers::{ConversionHandler, LoggingHandler, MenuHandler};
pub use runner::{run_polling_mode, run_server_mode};
pub use telegram::{TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use web::{build_router, AppState};
