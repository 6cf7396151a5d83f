//! Read-only view of a loaded spreadsheet.
//!
//! Rows and columns are 1-based, matching A1 notation. The grid is sparse:
//! cells that were never set read as [`CellValue::Empty`].

mod cell;
mod coord;

pub use cell::CellValue;
pub use coord::{COLUMN_A, CellRef, column_index, column_letters};

use std::collections::BTreeMap;

static EMPTY: CellValue = CellValue::Empty;

/// A 2-D sheet of cell values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: BTreeMap<CellRef, CellValue>,
    last_row: u32,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell. Setting any cell, even an empty one, extends the sheet's
    /// last row the way a worksheet dimension would.
    pub fn set(&mut self, cell: CellRef, value: impl Into<CellValue>) {
        self.last_row = self.last_row.max(cell.row);
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, value);
        }
    }

    /// Builder form of [`Grid::set`].
    #[must_use]
    pub fn with(mut self, cell: CellRef, value: impl Into<CellValue>) -> Self {
        self.set(cell, value);
        self
    }

    /// Extend the sheet to at least `row` without setting a value.
    pub fn extend_to_row(&mut self, row: u32) {
        self.last_row = self.last_row.max(row);
    }

    /// Value at a cell; absent cells read as empty.
    #[must_use]
    pub fn get(&self, cell: CellRef) -> &CellValue {
        self.cells.get(&cell).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn value_at(&self, row: u32, col: u32) -> &CellValue {
        self.get(CellRef::new(row, col))
    }

    /// Highest row the sheet spans, `0` for an empty sheet.
    #[must_use]
    pub const fn last_row(&self) -> u32 {
        self.last_row
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(address: &str) -> CellRef {
        CellRef::parse(address).unwrap()
    }

    #[test]
    fn absent_cells_read_empty() {
        let grid = Grid::new();
        assert!(grid.get(CellRef::new(3, 2)).is_empty());
        assert_eq!(grid.last_row(), 0);
    }

    #[test]
    fn set_tracks_last_row() {
        let grid = Grid::new().with(at("B3"), "Soup").with(at("A40"), "");
        assert_eq!(grid.last_row(), 40);
        assert_eq!(grid.filled_cells(), 1);
        assert_eq!(grid.value_at(3, 2), &CellValue::Text("Soup".into()));
    }

    #[test]
    fn blank_text_is_stored_as_absent() {
        let grid = Grid::new().with(at("A14"), "   ");
        assert_eq!(grid.filled_cells(), 0);
        assert!(grid.value_at(14, COLUMN_A).is_empty());
    }

    #[test]
    fn overwrite_with_empty_clears_cell() {
        let mut grid = Grid::new().with(at("E15"), 3.5);
        grid.set(CellRef::new(15, 5), CellValue::Empty);
        assert!(grid.value_at(15, 5).is_empty());
        assert_eq!(grid.last_row(), 15);
    }
}
