//! Error types for gridquery-core

use crate::cell::CellAddress;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridquery-core
#[derive(Debug, Error)]
pub enum Error {
    /// Column letters are empty or contain characters outside `A`-`Z`
    #[error("Invalid column letters: {0:?}")]
    InvalidColumnLetters(String),

    /// Column indices are 1-based; 0 has no letter form
    #[error("Invalid column index: {0}")]
    InvalidColumnIndex(u32),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Range start is past its end in at least one dimension
    #[error("Invalid range: start {start} is past end {end}")]
    InvalidRange {
        start: CellAddress,
        end: CellAddress,
    },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0:?}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Completion text could not be recovered as a JSON object or array.
    /// Carries the complete original text for the caller to surface.
    #[error("Completion payload is not recoverable as JSON")]
    MalformedPayload { raw: String },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
