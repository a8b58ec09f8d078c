//! Mock implementation of [`eraxchange_bot::Bot`] that records every outgoing call.

use async_trait::async_trait;
use eraxchange_bot::{Bot, Chat, Result, XchangeError};
use std::sync::{Arc, Mutex};

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Markdown { chat_id: i64, text: String },
    WebAppButton {
        chat_id: i64,
        text: String,
        button_text: String,
        url: String,
    },
    Typing { chat_id: i64 },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    /// When true every send fails with a Bot error.
    fail: bool,
    /// When true only Markdown sends fail, as when Telegram cannot parse the entities.
    reject_markdown: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn rejecting_markdown() -> Arc<Self> {
        Arc::new(Self {
            reject_markdown: true,
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Sent calls other than typing indicators.
    pub fn replies(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| !matches!(s, Sent::Typing { .. }))
            .collect()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail {
            return Err(XchangeError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.reject_markdown {
            return Err(XchangeError::Bot("can't parse entities".to_string()));
        }
        self.record(Sent::Markdown {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_web_app_button(
        &self,
        chat: &Chat,
        text: &str,
        button_text: &str,
        url: &str,
    ) -> Result<()> {
        self.record(Sent::WebAppButton {
            chat_id: chat.id,
            text: text.to_string(),
            button_text: button_text.to_string(),
            url: url.to_string(),
        })
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.record(Sent::Typing { chat_id: chat.id })
    }
}
