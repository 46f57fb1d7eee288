//! # gridquery-kb
//!
//! Knowledge services for gridquery: the structured knowledge-base model,
//! prompt construction, the extraction and SQL-generation services (one
//! awaited completion each), and the canned keyword-to-SQL template catalog.

pub mod error;
pub mod extractor;
pub mod knowledge;
pub mod prompt;
pub mod sql;
pub mod templates;

pub use error::{KbError, KbResult};
pub use extractor::{extract_payload, KnowledgeExtractor};
pub use knowledge::{
    BusinessRule, ColumnDefinition, GeneratedQuery, KnowledgeBase, TableDefinition, TestScenario,
};
pub use sql::SqlGenerator;
pub use templates::{QueryTemplate, TemplateCatalog};
