//! # gridquery-csv
//!
//! CSV reading for gridquery. A CSV file becomes one sparse
//! [`gridquery_core::Sheet`], with optional scalar type detection.

pub mod error;
pub mod options;
pub mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
