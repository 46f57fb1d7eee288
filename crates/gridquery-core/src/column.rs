//! Bijective base-26 column numbering
//!
//! Spreadsheet columns are numbered A, B, ..., Z, AA, AB, ... with no zero
//! digit, so the usual positional-base conversion does not apply directly:
//! encoding decrements before each division step.

use crate::error::{Error, Result};

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, ...)
///
/// Only uppercase ASCII letters are accepted; anything else (including the
/// empty string) is rejected.
///
/// # Examples
/// ```
/// use gridquery_core::column::column_index;
///
/// assert_eq!(column_index("A").unwrap(), 1);
/// assert_eq!(column_index("AA").unwrap(), 27);
/// assert!(column_index("a1").is_err());
/// ```
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumnLetters(letters.to_string()));
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(Error::InvalidColumnLetters(letters.to_string()));
        }
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(c as u32 - 'A' as u32 + 1))
            .ok_or_else(|| Error::InvalidColumnLetters(letters.to_string()))?;
    }

    Ok(index)
}

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, ...)
///
/// Index 0 has no letter form and is rejected.
pub fn column_letters(index: u32) -> Result<String> {
    if index == 0 {
        return Err(Error::InvalidColumnIndex(index));
    }

    let mut result = String::new();
    let mut n = index;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    Ok(result)
}
