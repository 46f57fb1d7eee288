//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gridquery_core::{CellValue, Sheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Rows and columns are 1-based; empty fields are left absent rather than
    /// stored as empty text.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Sheet::new(options.sheet_name.clone());
        let mut row_idx = 1u32;

        // Keep the header as row 1 if present
        if options.has_header {
            if let Ok(headers) = csv_reader.headers() {
                for (col, value) in headers.iter().enumerate() {
                    if !value.is_empty() {
                        sheet.set_at(row_idx, col as u32 + 1, value);
                    }
                }
                row_idx += 1;
            }
        }

        for result in csv_reader.records() {
            let record = result?;

            for (col, field) in record.iter().enumerate() {
                let value = if options.auto_detect_types {
                    match Self::detect_type(field) {
                        Some(value) => value,
                        None => continue,
                    }
                } else if field.is_empty() {
                    continue;
                } else {
                    CellValue::Text(field.to_string())
                };

                sheet.set_at(row_idx, col as u32 + 1, value);
            }

            row_idx += 1;
        }

        Ok(sheet)
    }

    /// Detect the scalar type of a field value (`None` for empty fields)
    fn detect_type(field: &str) -> Option<CellValue> {
        let field = field.trim();

        if field.is_empty() {
            return None;
        }

        // Try boolean
        match field.to_lowercase().as_str() {
            "true" | "yes" => return Some(CellValue::Bool(true)),
            "false" | "no" => return Some(CellValue::Bool(false)),
            _ => {}
        }

        // Try number
        if let Ok(n) = field.parse::<f64>() {
            return Some(CellValue::Number(n));
        }

        // Default to text
        Some(CellValue::Text(field.to_string()))
    }
}
