//! Knowledge service error types

use thiserror::Error;

/// Result type for knowledge operations
pub type KbResult<T> = std::result::Result<T, KbError>;

/// Errors that can occur in the knowledge services
#[derive(Debug, Error)]
pub enum KbError {
    /// Core error (serialization, payload extraction)
    #[error("Core error: {0}")]
    Core(#[from] gridquery_core::Error),

    /// Chat client error
    #[error("Chat client error: {0}")]
    Llm(#[from] gridquery_llm::LlmError),

    /// The extracted JSON does not match the expected payload schema
    #[error("Payload does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// The workbook has no cell data to analyze
    #[error("Workbook has no cell data to analyze")]
    EmptyWorkbook,
}
