//! Chat-completion clients

use crate::chat::ChatMessage;
use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};
use async_trait::async_trait;
use serde_json::json;

/// A client that turns an ordered message list into one completion text
///
/// Callers await exactly one request at a time; retry and backoff are the
/// caller's concern, not the client's.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the messages and return the completion text
    async fn complete(&self, messages: &[ChatMessage]) -> LlmResult<String>;
}

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct HttpChatClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl HttpChatClient {
    /// Create a client with the given configuration
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Access the configuration this client was built with
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        if self.config.base_url.ends_with('/') {
            format!("{}chat/completions", self.config.base_url)
        } else {
            format!("{}/chat/completions", self.config.base_url)
        }
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> LlmResult<String> {
        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        tracing::debug!(
            model = %self.config.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Chat completion request rejected");
            return Err(LlmError::Api { status, body });
        }

        let payload: serde_json::Value = response.json().await?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(LlmError::InvalidResponse)
    }
}
