//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "eraxchange")]
#[command(about = "Currency exchange Telegram bot and web mini-app", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Long-poll Telegram for updates (removes any webhook first).
    Poll {
        /// Overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Serve the mini-app, exchange API and webhook endpoint over HTTP.
    Serve {
        /// Overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Do not register the webhook with Telegram on startup.
        #[arg(long)]
        no_webhook: bool,
    },
}

/// Load AppConfig from environment. If `token` is provided it overrides the env token.
pub fn load_config(token: Option<String>) -> Result<AppConfig> {
    AppConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from(["eraxchange", "serve", "--no-webhook", "-t", "1:x"]).unwrap();
        match cli.command {
            Commands::Serve { token, no_webhook } => {
                assert_eq!(token.as_deref(), Some("1:x"));
                assert!(no_webhook);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_poll() {
        let cli = Cli::try_parse_from(["eraxchange", "poll"]).unwrap();
        assert!(matches!(cli.command, Commands::Poll { token: None }));
    }
}
