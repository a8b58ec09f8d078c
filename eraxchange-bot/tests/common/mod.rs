//! Shared helpers for integration tests: recording bot, scripted LLM, in-process rate provider.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;
pub mod mock_provider;

use chrono::Utc;
use eraxchange_bot::{Chat, Message, User};

pub const CHAT_ID: i64 = 456;

/// Private-chat text message from user 123.
pub fn text_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}
