//! Coordinate lookup and bounded column scans over a [`Grid`].

use crate::grid::{CellRef, CellValue, Grid};
use crate::layout::ScanWindow;

/// A row that holds an ingredient name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub row: u32,
    pub name: String,
}

/// Pure read access to the parts of a grid the checkers care about.
#[derive(Debug, Clone, Copy)]
pub struct FieldLocator<'g> {
    grid: &'g Grid,
}

impl<'g> FieldLocator<'g> {
    #[must_use]
    pub const fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub const fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[must_use]
    pub fn header_value(&self, cell: CellRef) -> &'g CellValue {
        self.grid.get(cell)
    }

    /// Rows in `start_row..=max_scan_row` (capped at the sheet's last row)
    /// whose name cell in `column` is filled and is not a heading sentinel.
    #[must_use]
    pub fn find_ingredient_rows(
        &self,
        column: u32,
        start_row: u32,
        max_scan_row: u32,
        sentinels: &[&str],
    ) -> Vec<IngredientRow> {
        ScanWindow::new(start_row, max_scan_row)
            .rows(self.grid.last_row())
            .filter_map(|row| {
                let name = self.grid.value_at(row, column).trimmed()?;
                let lowered = name.to_lowercase();
                if sentinels.iter().any(|sentinel| *sentinel == lowered) {
                    return None;
                }
                Some(IngredientRow {
                    row,
                    name: name.into_owned(),
                })
            })
            .collect()
    }

    /// First row in `start_row..=max_scan_row` whose cell in `column`
    /// contains `marker`, compared in lowercase.
    #[must_use]
    pub fn find_method_marker_row(
        &self,
        column: u32,
        start_row: u32,
        max_scan_row: u32,
        marker: &str,
    ) -> Option<u32> {
        ScanWindow::new(start_row, max_scan_row)
            .rows(self.grid.last_row())
            .find(|&row| {
                self.grid
                    .value_at(row, column)
                    .trimmed()
                    .is_some_and(|text| text.to_lowercase().contains(marker))
            })
    }

    /// Whether any cell in `column` is filled within `start_row..=max_scan_row`.
    #[must_use]
    pub fn any_filled(&self, column: u32, start_row: u32, max_scan_row: u32) -> bool {
        ScanWindow::new(start_row, max_scan_row)
            .rows(self.grid.last_row())
            .any(|row| !self.grid.value_at(row, column).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::COLUMN_A;
    use pretty_assertions::assert_eq;

    const SENTINELS: &[&str] = &["", "ingredients", "method", "instructions"];

    fn a(row: u32) -> CellRef {
        CellRef::new(row, COLUMN_A)
    }

    #[test]
    fn sentinel_rows_are_not_ingredients() {
        let grid = Grid::new()
            .with(a(14), "Ingredients")
            .with(a(15), "Butter")
            .with(a(16), "  ")
            .with(a(17), " METHOD ")
            .with(a(18), "Flour ");
        let rows = FieldLocator::new(&grid).find_ingredient_rows(COLUMN_A, 14, 100, SENTINELS);
        assert_eq!(
            rows,
            vec![
                IngredientRow { row: 15, name: "Butter".into() },
                IngredientRow { row: 18, name: "Flour".into() },
            ]
        );
    }

    #[test]
    fn ingredient_scan_stops_at_cap() {
        let grid = Grid::new().with(a(100), "Salt").with(a(101), "Pepper");
        let rows = FieldLocator::new(&grid).find_ingredient_rows(COLUMN_A, 14, 100, SENTINELS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 100);
    }

    #[test]
    fn numeric_names_count_as_ingredients() {
        let grid = Grid::new().with(a(20), 42.0);
        let rows = FieldLocator::new(&grid).find_ingredient_rows(COLUMN_A, 14, 100, SENTINELS);
        assert_eq!(rows[0].name, "42");
    }

    #[test]
    fn method_marker_is_first_substring_match() {
        let grid = Grid::new()
            .with(a(30), "Cooking Method:")
            .with(a(40), "method");
        let locator = FieldLocator::new(&grid);
        assert_eq!(locator.find_method_marker_row(COLUMN_A, 14, 200, "method"), Some(30));
        assert_eq!(locator.find_method_marker_row(COLUMN_A, 31, 200, "method"), Some(40));
        assert_eq!(locator.find_method_marker_row(COLUMN_A, 41, 200, "method"), None);
    }

    #[test]
    fn header_value_reads_absent_as_empty() {
        let grid = Grid::new();
        assert!(FieldLocator::new(&grid).header_value(CellRef::new(3, 2)).is_empty());
    }

    #[test]
    fn any_filled_respects_window() {
        let grid = Grid::new().with(a(25), "Whisk");
        let locator = FieldLocator::new(&grid);
        assert!(locator.any_filled(COLUMN_A, 21, 40));
        assert!(!locator.any_filled(COLUMN_A, 26, 40));
    }
}
