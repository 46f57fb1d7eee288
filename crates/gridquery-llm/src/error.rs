//! Chat client error types

use thiserror::Error;

/// Result type for chat operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to a chat-completion API
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not contain a completion where expected
    #[error("Completion response shape not recognized")]
    InvalidResponse,
}
