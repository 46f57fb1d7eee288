//! Range serialization - sheet regions as tab/newline-delimited text
//!
//! The output feeds text-generation prompts, so the emission contract is
//! exact: a present cell contributes its display text plus one tab, an absent
//! cell contributes nothing at all, and every row ends in a newline whether or
//! not it had any cells. Tab counts therefore vary with sparsity; rows are
//! not padded to the column span.

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::sheet::Sheet;

/// Serialize a rectangular region of a sheet into tab/newline-delimited text
///
/// Rows are visited top to bottom, columns left to right, both inclusive.
/// Fails with [`Error::InvalidRange`] when the range's start is past its end
/// in either dimension. Missing cell data is not an error; an entirely empty
/// region serializes to one newline per row.
///
/// # Examples
/// ```
/// use gridquery_core::{serialize_range, CellRange, Sheet};
///
/// let mut sheet = Sheet::new("Data");
/// sheet.set_a1("A1", "x").unwrap();
///
/// let range = CellRange::parse("A1:B2").unwrap();
/// assert_eq!(serialize_range(&sheet, &range).unwrap(), "x\t\n\n");
/// ```
pub fn serialize_range(sheet: &Sheet, range: &CellRange) -> Result<String> {
    if !range.is_ordered() {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let mut out = String::new();

    for row in range.start.row..=range.end.row {
        for col in range.start.col..=range.end.col {
            if let Some(value) = sheet.get(&CellAddress::new(row, col)) {
                out.push_str(&value.to_string());
                out.push('\t');
            }
        }
        out.push('\n');
    }

    Ok(out)
}

/// Serialize the sheet's occupied rectangle
///
/// Returns `None` for a sheet with no cells.
pub fn serialize_used_range(sheet: &Sheet) -> Result<Option<String>> {
    match sheet.used_range() {
        Some(range) => serialize_range(sheet, &range).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet_with(cells: &[(&str, &str)]) -> Sheet {
        let mut sheet = Sheet::new("Data");
        for (addr, value) in cells {
            sheet.set_a1(addr, *value).unwrap();
        }
        sheet
    }

    #[test]
    fn serializes_sparse_corner_exactly() {
        // Present cell emits value + tab, absent cells emit nothing,
        // every row ends in a newline.
        let sheet = sheet_with(&[("A1", "x")]);
        let range = CellRange::parse("A1:B2").unwrap();

        assert_eq!(serialize_range(&sheet, &range).unwrap(), "x\t\n\n");
    }

    #[test]
    fn serializes_full_rectangle() {
        let mut sheet = Sheet::new("Data");
        sheet.set_a1("A1", "name").unwrap();
        sheet.set_a1("B1", "total").unwrap();
        sheet.set_a1("A2", "widgets").unwrap();
        sheet.set_a1("B2", 12.0).unwrap();

        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(
            serialize_range(&sheet, &range).unwrap(),
            "name\ttotal\t\nwidgets\t12\t\n"
        );
    }

    #[test]
    fn single_cell_range_emits_one_row() {
        let sheet = sheet_with(&[("A1", "x")]);

        let range = CellRange::parse("A1").unwrap();
        assert_eq!(serialize_range(&sheet, &range).unwrap(), "x\t\n");

        // Same range over an empty sheet: one blank line
        let empty = Sheet::new("Empty");
        assert_eq!(serialize_range(&empty, &range).unwrap(), "\n");
    }

    #[test]
    fn empty_region_is_one_newline_per_row() {
        let sheet = Sheet::new("Empty");
        let range = CellRange::parse("A1:C3").unwrap();

        assert_eq!(serialize_range(&sheet, &range).unwrap(), "\n\n\n");
    }

    #[test]
    fn middle_gaps_shift_tab_counts() {
        // B2 absent: row 2 has a single value and a single tab.
        let sheet = sheet_with(&[("A1", "a"), ("B1", "b"), ("A2", "c")]);
        let range = CellRange::parse("A1:B2").unwrap();

        assert_eq!(serialize_range(&sheet, &range).unwrap(), "a\tb\t\nc\t\n");
    }

    #[test]
    fn rejects_unordered_ranges() {
        let sheet = Sheet::new("Data");

        let bad_cols = CellRange::from_indices(1, 2, 1, 1);
        assert!(matches!(
            serialize_range(&sheet, &bad_cols),
            Err(Error::InvalidRange { .. })
        ));

        let bad_rows = CellRange::from_indices(2, 1, 1, 1);
        assert!(matches!(
            serialize_range(&sheet, &bad_rows),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn serialization_is_deterministic() {
        let sheet = sheet_with(&[("A1", "x"), ("C2", "y"), ("B3", "z")]);
        let range = CellRange::parse("A1:C3").unwrap();

        let first = serialize_range(&sheet, &range).unwrap();
        let second = serialize_range(&sheet, &range).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn used_range_serialization() {
        let sheet = sheet_with(&[("B2", "x"), ("C3", "y")]);
        assert_eq!(
            serialize_used_range(&sheet).unwrap(),
            Some("x\t\ny\t\n".to_string())
        );

        assert_eq!(serialize_used_range(&Sheet::new("Empty")).unwrap(), None);
    }
}
