//! Sheet type - a named sparse grid of cell values

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::error::Result;
use ahash::AHashMap;

/// A named sheet holding a sparse mapping from addresses to scalar values
///
/// Addresses with no entry are absent; there is no distinction between a cell
/// that was never written and one that was cleared.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    cells: AHashMap<CellAddress, CellValue>,
}

impl Sheet {
    /// Create a new empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: AHashMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a cell value at an address
    pub fn set<V: Into<CellValue>>(&mut self, addr: CellAddress, value: V) {
        self.cells.insert(addr, value.into());
    }

    /// Set a cell value at 1-based row/column indices
    pub fn set_at<V: Into<CellValue>>(&mut self, row: u32, col: u32, value: V) {
        self.set(CellAddress::new(row, col), value);
    }

    /// Set a cell value using an A1-style address string
    pub fn set_a1<V: Into<CellValue>>(&mut self, addr: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(addr)?;
        self.set(addr, value);
        Ok(())
    }

    /// Get the value at an address, if present
    pub fn get(&self, addr: &CellAddress) -> Option<&CellValue> {
        self.cells.get(addr)
    }

    /// Get the value at 1-based row/column indices, if present
    pub fn value_at(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.get(&CellAddress::new(row, col))
    }

    /// Remove the value at an address, returning it if it was present
    pub fn clear(&mut self, addr: &CellAddress) -> Option<CellValue> {
        self.cells.remove(addr)
    }

    /// Get the number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet has no occupied cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all occupied cells (arbitrary order)
    pub fn cells(&self) -> impl Iterator<Item = (&CellAddress, &CellValue)> {
        self.cells.iter()
    }

    /// Get the smallest rectangle covering every occupied cell
    ///
    /// Returns `None` for an empty sheet.
    pub fn used_range(&self) -> Option<CellRange> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for addr in self.cells.keys() {
            bounds = Some(match bounds {
                None => (addr.row, addr.col, addr.row, addr.col),
                Some((min_row, min_col, max_row, max_col)) => (
                    min_row.min(addr.row),
                    min_col.min(addr.col),
                    max_row.max(addr.row),
                    max_col.max(addr.col),
                ),
            });
        }

        bounds.map(|(min_row, min_col, max_row, max_col)| {
            CellRange::from_indices(min_row, min_col, max_row, max_col)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_set_get() {
        let mut sheet = Sheet::new("Data");
        assert_eq!(sheet.name(), "Data");
        assert!(sheet.is_empty());

        sheet.set_a1("A1", "x").unwrap();
        sheet.set_at(2, 2, 42.0);

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.value_at(1, 1), Some(&CellValue::Text("x".into())));
        assert_eq!(sheet.value_at(2, 2), Some(&CellValue::Number(42.0)));
        assert_eq!(sheet.value_at(3, 3), None);
    }

    #[test]
    fn test_sheet_clear() {
        let mut sheet = Sheet::new("Data");
        sheet.set_at(1, 1, "x");

        assert_eq!(sheet.clear(&CellAddress::new(1, 1)), Some("x".into()));
        assert_eq!(sheet.clear(&CellAddress::new(1, 1)), None);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_used_range() {
        let mut sheet = Sheet::new("Data");
        assert!(sheet.used_range().is_none());

        sheet.set_a1("B2", 1.0).unwrap();
        assert_eq!(
            sheet.used_range().unwrap(),
            CellRange::parse("B2").unwrap()
        );

        sheet.set_a1("D5", 2.0).unwrap();
        sheet.set_a1("C1", 3.0).unwrap();
        assert_eq!(
            sheet.used_range().unwrap(),
            CellRange::parse("B1:D5").unwrap()
        );
    }
}
