//! Prelude module - common imports for gridquery users
//!
//! ```rust
//! use gridquery::prelude::*;
//! ```

pub use crate::{
    // Core utilities
    column_index,
    column_letters,
    extract_json,
    serialize_range,
    serialize_used_range,

    // Cell types
    CellAddress,
    CellRange,
    CellValue,

    // Chat client types
    ChatClient,
    ChatMessage,
    ChatRole,

    // Error types
    Error,
    GeneratedQuery,
    HttpChatClient,
    KbError,

    // Knowledge types and services
    KnowledgeBase,
    KnowledgeExtractor,
    LlmConfig,
    Result,
    Sheet,
    SqlGenerator,
    TemplateCatalog,

    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
};

#[cfg(feature = "csv")]
pub use crate::CsvReader;
#[cfg(feature = "xlsx")]
pub use crate::XlsxReader;
