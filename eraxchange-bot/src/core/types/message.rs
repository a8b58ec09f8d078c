//! Incoming message type for the core model.

use chrono::{DateTime, Utc};

use super::participants::{Chat, User};

/// A single incoming message: who sent it, where, and its text.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages.
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the message is a bot command (`/...`).
    pub fn is_command(&self) -> bool {
        self.content.trim_start().starts_with('/')
    }
}
