//! # gridquery-xlsx
//!
//! XLSX workbook reading for gridquery, backed by calamine. Worksheets are
//! loaded into the core's sparse [`gridquery_core::Sheet`] model; styling,
//! formulas and other workbook features are not carried over.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
