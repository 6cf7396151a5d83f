//! A1-style cell coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// Column A, where ingredient names and section markers live.
pub const COLUMN_A: u32 = 1;

/// A 1-based (row, column) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an A1 coordinate such as `B3` or `AA120`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::Invalid` for anything that is not letters
    /// followed by a positive row number.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let invalid = || AddressError::Invalid(address.to_string());
        let trimmed = address.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = trimmed.split_at(split);
        let col = column_index(letters).ok_or_else(invalid)?;
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

impl FromStr for CellRef {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert a 1-based column index to letters (`1` -> `A`, `27` -> `AA`).
#[must_use]
pub fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(char::from(b'A' + u8::try_from(rem).unwrap_or(0)));
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Convert column letters to a 1-based index, case-insensitively.
#[must_use]
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0_u32, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = u32::from(c.to_ascii_uppercase()) - u32::from('A') + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })
}
