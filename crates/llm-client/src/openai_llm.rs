//! OpenAI-compatible [`LlmClient`] backed by openai-client.

use anyhow::Result;
use async_trait::async_trait;
use tracing::instrument;

use super::{chat_message_to_openai, ChatMessage, LlmClient, LlmConfig};

/// [`LlmClient`] over any OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model,
        }
    }

    /// Builds a client from resolved config (key, base URL, model).
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::with_base_url(
            config.api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
        )
    }

    fn to_openai(
        messages: &[ChatMessage],
    ) -> Result<Vec<openai_client::ChatCompletionRequestMessage>> {
        messages.iter().map(chat_message_to_openai).collect()
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let messages = Self::to_openai(&messages)?;
        self.client.chat_completion(&self.model, messages).await
    }

    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete_json(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let messages = Self::to_openai(&messages)?;
        self.client.chat_completion_json(&self.model, messages).await
    }
}
