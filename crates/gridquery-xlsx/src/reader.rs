//! XLSX reader

use std::path::Path;

use crate::error::{XlsxError, XlsxResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use gridquery_core::{CellValue, Sheet, Workbook};

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read an XLSX file into a workbook
    ///
    /// Every worksheet becomes a [`Sheet`]; cells that hold errors or nothing
    /// stay absent in the sparse store.
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let mut xlsx: Xlsx<_> = open_workbook(path)?;
        let names = xlsx.sheet_names().to_owned();

        let mut workbook = Workbook::new();
        for (index, name) in names.iter().enumerate() {
            let range = match xlsx.worksheet_range_at(index) {
                Some(range) => range?,
                None => continue,
            };
            workbook.add_sheet(convert_range(name, &range))?;
        }

        if workbook.is_empty() {
            return Err(XlsxError::NoWorksheets);
        }

        Ok(workbook)
    }
}

/// Convert a calamine cell range into a sparse sheet
///
/// Calamine ranges start at the first occupied cell, not at A1; the range's
/// start offset is added back so addresses stay absolute (and 1-based).
fn convert_range(name: &str, range: &calamine::Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (r, row) in range.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(value) = convert_cell(cell) {
                sheet.set_at(start_row + r as u32 + 1, start_col + c as u32 + 1, value);
            }
        }
    }

    sheet
}

/// Map a calamine cell to a scalar value, or `None` for absent/error cells
fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::Error(_) => None,
        // Datetimes and durations keep their display text
        other => Some(CellValue::Text(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), None);
        assert_eq!(
            convert_cell(&Data::String("hello".into())),
            Some(CellValue::Text("hello".into()))
        );
        assert_eq!(
            convert_cell(&Data::Float(2.5)),
            Some(CellValue::Number(2.5))
        );
        assert_eq!(convert_cell(&Data::Int(3)), Some(CellValue::Number(3.0)));
        assert_eq!(convert_cell(&Data::Bool(true)), Some(CellValue::Bool(true)));
        assert_eq!(
            convert_cell(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }

    #[test]
    fn test_convert_range_keeps_absolute_addresses() {
        // A range whose first occupied cell is B2 (0-based (1, 1))
        let mut range = calamine::Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("name".into()));
        range.set_value((1, 2), Data::String("qty".into()));
        range.set_value((2, 1), Data::String("widget".into()));
        range.set_value((2, 2), Data::Int(7));

        let sheet = convert_range("Orders", &range);

        assert_eq!(sheet.name(), "Orders");
        assert_eq!(sheet.len(), 4);
        assert_eq!(
            sheet.value_at(2, 2),
            Some(&CellValue::Text("name".into()))
        );
        assert_eq!(sheet.value_at(3, 3), Some(&CellValue::Number(7.0)));
        assert_eq!(sheet.value_at(1, 1), None);
    }

    #[test]
    fn test_convert_range_skips_gaps() {
        let mut range = calamine::Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("a".into()));
        range.set_value((1, 1), Data::Float(1.5));

        let sheet = convert_range("Sparse", &range);

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.value_at(1, 2), None);
        assert_eq!(sheet.value_at(2, 1), None);
        assert_eq!(sheet.value_at(2, 2), Some(&CellValue::Number(1.5)));
    }
}
