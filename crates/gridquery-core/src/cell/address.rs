//! Cell address and range types

use crate::column::{column_index, column_letters};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AA10")
///
/// Both coordinates are 1-based: row 1 is the first row and column 1 is
/// column "A". The textual form is the bijective base-26 column letters
/// followed by the decimal row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ...)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Column letters must be uppercase `A`-`Z`; rows are 1-based decimal.
    ///
    /// # Examples
    /// ```
    /// use gridquery_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.row, 3);
    /// assert_eq!(addr.col, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(s.len());

        let (letters, digits) = s.split_at(split);
        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = column_index(letters)
            .map_err(|_| Error::InvalidAddress(format!("bad column letters in '{}'", s)))?;

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, col })
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        let letters = column_letters(self.col).unwrap_or_default();
        format!("{}{}", letters, self.row)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An inclusive rectangular range of cells (e.g., "A1:B10")
///
/// A range is well-formed when `start` is at or before `end` in both
/// dimensions. Construction does not reorder the endpoints; operations that
/// require ordering (the serializer, counts) check it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left when ordered)
    pub start: CellAddress,
    /// End address (bottom-right when ordered)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Create a range from 1-based row/column indices
    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation (or a single cell like "C3")
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = CellAddress::parse(&s[..colon_pos])?;
            let end = CellAddress::parse(&s[colon_pos + 1..])?;
            Ok(Self::new(start, end))
        } else {
            let addr = CellAddress::parse(s)?;
            Ok(Self::single(addr))
        }
    }

    /// Check that `start` is component-wise at or before `end`
    pub fn is_ordered(&self) -> bool {
        self.start.row <= self.end.row && self.start.col <= self.end.col
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range (0 when unordered)
    pub fn row_count(&self) -> u32 {
        if self.is_ordered() {
            self.end.row - self.start.row + 1
        } else {
            0
        }
    }

    /// Get the number of columns in the range (0 when unordered)
    pub fn col_count(&self) -> u32 {
        if self.is_ordered() {
            self.end.col - self.start.col + 1
        } else {
            0
        }
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all cell addresses in the range (row by row)
    ///
    /// An unordered range yields nothing.
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }

    /// Format as an A1:B10 string (single cells collapse to one address)
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.range.is_ordered() || self.current_row > self.range.end.row {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);

        self.current_col += 1;
        if self.current_col > self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        }

        Some(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr.row, 1);
        assert_eq!(addr.col, 1);

        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!(addr.row, 2);
        assert_eq!(addr.col, 2);

        let addr = CellAddress::parse("AA10").unwrap();
        assert_eq!(addr.row, 10);
        assert_eq!(addr.col, 27);
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("a1").is_err()); // Lowercase is rejected
        assert!(CellAddress::parse("A1B").is_err());
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(1, 1).to_string(), "A1");
        assert_eq!(CellAddress::new(100, 3).to_string(), "C100");
        assert_eq!(CellAddress::new(10, 27).to_string(), "AA10");
    }

    #[test]
    fn test_address_parse_display_round_trip() {
        for text in ["A1", "Z26", "AA1", "AZ52", "XFD1048576"] {
            let addr = CellAddress::parse(text).unwrap();
            assert_eq!(addr.to_string(), text);
        }
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellAddress::new(1, 1));
        assert_eq!(range.end, CellAddress::new(2, 2));

        // Single cell
        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, CellAddress::new(3, 3));
        assert_eq!(range.end, CellAddress::new(3, 3));
    }

    #[test]
    fn test_cell_range_ordering() {
        assert!(CellRange::parse("A1:B2").unwrap().is_ordered());
        assert!(CellRange::parse("C3").unwrap().is_ordered());

        let backwards = CellRange::from_indices(2, 2, 1, 1);
        assert!(!backwards.is_ordered());
        assert_eq!(backwards.row_count(), 0);
        assert_eq!(backwards.cell_count(), 0);
        assert_eq!(backwards.cells().count(), 0);
    }

    #[test]
    fn test_cell_range_contains() {
        let range = CellRange::parse("B2:D4").unwrap();

        assert!(range.contains(&CellAddress::new(2, 2))); // B2
        assert!(range.contains(&CellAddress::new(4, 4))); // D4
        assert!(range.contains(&CellAddress::new(3, 3))); // C3

        assert!(!range.contains(&CellAddress::new(1, 1))); // A1
        assert!(!range.contains(&CellAddress::new(5, 2))); // B5
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], CellAddress::new(1, 1)); // A1
        assert_eq!(cells[1], CellAddress::new(1, 2)); // B1
        assert_eq!(cells[2], CellAddress::new(2, 1)); // A2
        assert_eq!(cells[3], CellAddress::new(2, 2)); // B2
    }

    #[test]
    fn test_cell_range_counts() {
        let range = CellRange::parse("B2:D4").unwrap();
        assert_eq!(range.row_count(), 3);
        assert_eq!(range.col_count(), 3);
        assert_eq!(range.cell_count(), 9);
    }
}
