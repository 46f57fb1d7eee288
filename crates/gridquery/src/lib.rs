//! # gridquery
//!
//! A toolkit for turning spreadsheets into SQL knowledge bases with a
//! text-generation API.
//!
//! The pipeline: read a workbook (XLSX or CSV), serialize each sheet's
//! occupied region into tab-delimited text, send it to a chat-completion
//! endpoint, and decode the structured knowledge base (table definitions,
//! business rules, test scenarios) out of the completion. From there,
//! questions are answered either by the canned keyword template catalog or
//! by asking the model to generate SQL over the knowledge base.
//!
//! ## Example
//!
//! ```rust
//! use gridquery::prelude::*;
//!
//! let mut sheet = Sheet::new("Orders");
//! sheet.set_a1("A1", "id").unwrap();
//! sheet.set_a1("B1", "total").unwrap();
//!
//! let range = CellRange::parse("A1:B1").unwrap();
//! let text = serialize_range(&sheet, &range).unwrap();
//! assert_eq!(text, "id\ttotal\t\n");
//! ```

pub mod prelude;

// Re-export core types
pub use gridquery_core::{
    column_index, column_letters, extract_json, serialize_range, serialize_used_range,
    CellAddress, CellRange, CellValue, Error, Result, Sheet, Workbook,
};

// Re-export chat client types
pub use gridquery_llm::{
    ChatClient, ChatMessage, ChatRole, HttpChatClient, LlmConfig, LlmError, LlmResult,
};

// Re-export knowledge types and services
pub use gridquery_kb::{
    extract_payload, BusinessRule, ColumnDefinition, GeneratedQuery, KbError, KnowledgeBase,
    KnowledgeExtractor, QueryTemplate, SqlGenerator, TableDefinition, TemplateCatalog,
    TestScenario,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use gridquery_csv::{CsvError, CsvReadOptions, CsvReader};
#[cfg(feature = "xlsx")]
pub use gridquery_xlsx::{XlsxError, XlsxReader};

use std::path::Path;

/// Extension trait for Workbook to add file opening
pub trait WorkbookExt {
    /// Open a workbook from a file, dispatching on the extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            #[cfg(feature = "xlsx")]
            Some("xlsx") | Some("xlsm") => {
                XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            #[cfg(feature = "csv")]
            Some("csv") => {
                let sheet = CsvReader::read_file(path, &CsvReadOptions::default())
                    .map_err(|e| Error::other(e.to_string()))?;

                let mut workbook = Workbook::new();
                workbook.add_sheet(sheet)?;
                Ok(workbook)
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
