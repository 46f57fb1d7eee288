//! Chat client configuration
//!
//! Configuration is an explicit value handed to the client at construction;
//! there is no process-global service state.

use serde::{Deserialize, Serialize};

/// Connection and sampling parameters for a chat-completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API (with or without trailing slash)
    pub base_url: String,
    /// Bearer token; omitted from requests when absent (local endpoints)
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1234/v1".to_string(),
            api_key: None,
            model: "local-model".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

impl LlmConfig {
    /// Config pointing at a base URL with a given model
    pub fn new<S: Into<String>, M: Into<String>>(base_url: S, model: M) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generation budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
