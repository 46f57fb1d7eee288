//! # gridquery-core
//!
//! Core data structures and text utilities for the gridquery toolkit.
//!
//! This crate provides the fundamental types used throughout gridquery:
//! - [`CellValue`] - Scalar cell values (text, numbers, booleans)
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`Sheet`] and [`Workbook`] - sparse sheet storage and sheet collections
//! - [`serialize_range`] - sheet regions as tab/newline-delimited prompt text
//! - [`extract_json`] - tolerant JSON recovery from model completions
//!
//! ## Example
//!
//! ```rust
//! use gridquery_core::{serialize_range, CellRange, Sheet};
//!
//! let mut sheet = Sheet::new("Orders");
//! sheet.set_a1("A1", "item").unwrap();
//! sheet.set_a1("B1", "qty").unwrap();
//! sheet.set_a1("A2", "widget").unwrap();
//! sheet.set_a1("B2", 3.0).unwrap();
//!
//! let range = CellRange::parse("A1:B2").unwrap();
//! let text = serialize_range(&sheet, &range).unwrap();
//! assert_eq!(text, "item\tqty\t\nwidget\t3\t\n");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod extract;
pub mod serialize;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellRangeIterator, CellValue};
pub use column::{column_index, column_letters};
pub use error::{Error, Result};
pub use extract::extract_json;
pub use serialize::{serialize_range, serialize_used_range};
pub use sheet::Sheet;
pub use workbook::Workbook;
