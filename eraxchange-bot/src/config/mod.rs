//! Application configuration: BaseConfig (Telegram, hosting, logging) + RatesConfig + optional LLM config.

mod app_config;
mod base;
mod rates;


pub use app_config::AppConfig;
pub use base::BaseConfig;
pub use rates::RatesConfig;
