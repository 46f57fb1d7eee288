//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while reading XLSX files
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Underlying XLSX parse error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// The file contained no readable worksheets
    #[error("Workbook has no readable worksheets")]
    NoWorksheets,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridquery_core::Error),
}
