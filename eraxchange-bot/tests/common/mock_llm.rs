//! Scripted [`llm_client::LlmClient`]: fixed answers for JSON-mode and plain completions.

use async_trait::async_trait;
use llm_client::{ChatMessage, LlmClient};
use std::sync::{Arc, Mutex};

pub struct MockLlm {
    /// Answer to `complete_json`; `Err` simulates a failed API call.
    json_reply: Result<String, String>,
    /// Answer to `complete`.
    chat_reply: Result<String, String>,
    pub json_calls: Mutex<Vec<Vec<ChatMessage>>>,
    pub chat_calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn new(json_reply: Result<&str, &str>, chat_reply: Result<&str, &str>) -> Arc<Self> {
        Arc::new(Self {
            json_reply: json_reply.map(String::from).map_err(String::from),
            chat_reply: chat_reply.map(String::from).map_err(String::from),
            json_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
        })
    }

    /// Extraction answers `json`; chat is not expected.
    pub fn extracting(json: &str) -> Arc<Self> {
        Self::new(Ok(json), Err("chat not expected"))
    }

    pub fn chat_call_count(&self) -> usize {
        self.chat_calls.lock().unwrap().len()
    }

    pub fn json_call_count(&self) -> usize {
        self.json_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        self.chat_calls.lock().unwrap().push(messages);
        self.chat_reply.clone().map_err(|e| anyhow::anyhow!(e))
    }

    async fn complete_json(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        self.json_calls.lock().unwrap().push(messages);
        self.json_reply.clone().map_err(|e| anyhow::anyhow!(e))
    }
}
