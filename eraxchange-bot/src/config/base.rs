//! Base config: Telegram Bot connection, hosting address, logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Fallback listen port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Base config: Telegram, HTTP listener, public host, log file.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Public host name (no scheme) serving the web app and webhook: PUBLIC_HOST or RENDER_EXTERNAL_HOSTNAME
    pub public_host: Option<String>,
    /// HOST, default 0.0.0.0
    pub host: String,
    /// PORT, default 8080
    pub port: u16,
    /// LOG_FILE, default logs/eraxchange.log
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let public_host = env::var("PUBLIC_HOST")
            .or_else(|_| env::var("RENDER_EXTERNAL_HOSTNAME"))
            .ok()
            .map(|h| normalize_host(&h))
            .filter(|h| !h.is_empty());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(p) => p
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {}", p))?,
            Err(_) => DEFAULT_PORT,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/eraxchange.log".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            public_host,
            host,
            port,
            log_file,
        })
    }

    /// Validate config (URLs must parse, token must not be blank).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(url) = self.hosting_url() {
            if reqwest::Url::parse(&url).is_err() {
                anyhow::bail!("PUBLIC_HOST does not form a valid URL: {}", url);
            }
        }
        Ok(())
    }

    /// `https://{public_host}`: the web app address opened from the bot menu.
    pub fn hosting_url(&self) -> Option<String> {
        self.public_host.as_ref().map(|h| format!("https://{}", h))
    }

    /// Path Telegram posts updates to: `/{bot_token}`.
    pub fn webhook_path(&self) -> String {
        format!("/{}", self.bot_token)
    }

    /// `https://{public_host}/{bot_token}`.
    pub fn webhook_url(&self) -> Option<String> {
        self.hosting_url()
            .map(|url| format!("{}{}", url, self.webhook_path()))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Strips scheme and trailing slashes: `https://x.onrender.com/` -> `x.onrender.com`.
fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}
