//! Declarative description of where a recipe spreadsheet keeps its fields.
//!
//! A [`RecipeLayout`] names every checked field together with the rule that
//! finds it: a fixed coordinate for header fields, a column scan for
//! ingredient rows, a marker scan for the method section. The checkers in
//! [`crate::checks`] evaluate a layout against a grid and never hardcode
//! coordinates themselves.

use std::ops::RangeInclusive;

use pantry_core::enums::Severity;

use crate::grid::{COLUMN_A, CellRef, CellValue};

/// Presence test applied to a located cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Any non-empty value.
    Filled,
    /// Non-empty and, once trimmed, not equal to a placeholder (case-sensitive).
    NotPlaceholder(&'static str),
    /// Non-empty and, once trimmed, not equal to a placeholder ignoring case.
    NotPlaceholderIgnoreCase(&'static str),
    /// Non-empty and not numerically zero.
    NonZero,
}

impl Presence {
    /// Whether the cell fails this presence test.
    #[must_use]
    pub fn is_missing(self, cell: &CellValue) -> bool {
        let Some(text) = cell.trimmed() else {
            return true;
        };
        match self {
            Self::Filled => false,
            Self::NotPlaceholder(placeholder) => text == placeholder,
            Self::NotPlaceholderIgnoreCase(placeholder) => text.eq_ignore_ascii_case(placeholder),
            Self::NonZero => cell.is_zero(),
        }
    }
}

/// An inclusive row window with a hard upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start_row: u32,
    pub max_row: u32,
}

impl ScanWindow {
    #[must_use]
    pub const fn new(start_row: u32, max_row: u32) -> Self {
        Self { start_row, max_row }
    }

    /// Rows to scan on a sheet whose last row is `last_row`. Empty when the
    /// sheet ends before the window starts.
    #[must_use]
    pub fn rows(self, last_row: u32) -> RangeInclusive<u32> {
        self.start_row..=self.max_row.min(last_row)
    }
}

/// A header field read from a fixed coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    pub key: &'static str,
    pub label: &'static str,
    pub cell: CellRef,
    pub severity: Severity,
    pub presence: Presence,
}

/// A per-ingredient column checked on every ingredient row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    pub key: &'static str,
    pub label: &'static str,
    pub column: u32,
    pub severity: Severity,
    pub presence: Presence,
}

/// Issue emitted when a whole section cannot be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRule {
    pub key: &'static str,
    pub label: &'static str,
    pub location: &'static str,
    pub severity: Severity,
}

/// How ingredient rows are found and which of their columns are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLayout {
    pub name_column: u32,
    pub window: ScanWindow,
    /// Name-cell values (trimmed, lowercase) that mark headings, not ingredients.
    pub sentinels: &'static [&'static str],
    pub columns: Vec<ColumnRule>,
    pub missing_table: MissingRule,
}

/// How the method section is found and what counts as instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodLayout {
    pub marker_column: u32,
    pub window: ScanWindow,
    /// Lowercase substring identifying the method heading.
    pub marker: &'static str,
    /// Rows after the marker searched for instruction text.
    pub instructions_span: u32,
    pub missing_section: MissingRule,
    pub missing_instructions_key: &'static str,
    pub missing_instructions_label: &'static str,
    pub missing_instructions_severity: Severity,
}

/// Complete layout of a recipe spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeLayout {
    pub header: Vec<HeaderRule>,
    pub ingredients: IngredientLayout,
    pub method: MethodLayout,
}

const INGREDIENT_SENTINELS: &[&str] = &["", "ingredients", "method", "instructions"];

const fn col(letters: u8) -> u32 {
    (letters - b'A') as u32 + 1
}

impl RecipeLayout {
    /// The costing-sheet layout: header in B3/B4/H4/B6, ingredients from row
    /// 14 in column A with costs in E/F/G, method heading in column A.
    ///
    /// Only AP cost, unit and yield are checked per ingredient even though the
    /// schema also declares weight, volume, EP cost and total cost.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            header: vec![
                HeaderRule {
                    key: "recipe_name",
                    label: "Recipe name",
                    cell: CellRef::new(3, col(b'B')),
                    severity: Severity::High,
                    presence: Presence::NotPlaceholder("Untitled Recipe"),
                },
                HeaderRule {
                    key: "concept",
                    label: "Concept",
                    cell: CellRef::new(4, col(b'B')),
                    severity: Severity::Medium,
                    presence: Presence::Filled,
                },
                HeaderRule {
                    key: "cuisine",
                    label: "Cuisine",
                    cell: CellRef::new(4, col(b'H')),
                    severity: Severity::Medium,
                    presence: Presence::NotPlaceholderIgnoreCase("unknown"),
                },
                HeaderRule {
                    key: "number_of_portions",
                    label: "Number of Portions",
                    cell: CellRef::new(6, col(b'B')),
                    severity: Severity::High,
                    presence: Presence::NonZero,
                },
            ],
            ingredients: IngredientLayout {
                name_column: COLUMN_A,
                window: ScanWindow::new(14, 100),
                sentinels: INGREDIENT_SENTINELS,
                columns: vec![
                    ColumnRule {
                        key: "ap_cost",
                        label: "AP$ / Unit",
                        column: col(b'E'),
                        severity: Severity::High,
                        presence: Presence::NonZero,
                    },
                    ColumnRule {
                        key: "unit",
                        label: "Unit",
                        column: col(b'F'),
                        severity: Severity::High,
                        presence: Presence::NonZero,
                    },
                    ColumnRule {
                        key: "yield_pct",
                        label: "Yield %",
                        column: col(b'G'),
                        severity: Severity::Medium,
                        presence: Presence::NonZero,
                    },
                ],
                missing_table: MissingRule {
                    key: "ingredients_table",
                    label: "Ingredients table",
                    location: "Row 14+",
                    severity: Severity::High,
                },
            },
            method: MethodLayout {
                marker_column: COLUMN_A,
                window: ScanWindow::new(14, 200),
                marker: "method",
                instructions_span: 20,
                missing_section: MissingRule {
                    key: "method_section",
                    label: "Method section",
                    location: "After ingredients",
                    severity: Severity::High,
                },
                missing_instructions_key: "instructions",
                missing_instructions_label: "Method/Instructions",
                missing_instructions_severity: Severity::High,
            },
        }
    }
}

impl Default for RecipeLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Presence::Filled, CellValue::Empty, true)]
    #[case(Presence::Filled, CellValue::Text("x".into()), false)]
    #[case(Presence::NotPlaceholder("Untitled Recipe"), CellValue::Text("Untitled Recipe".into()), true)]
    #[case(Presence::NotPlaceholder("Untitled Recipe"), CellValue::Text("  Untitled Recipe ".into()), true)]
    #[case(Presence::NotPlaceholder("Untitled Recipe"), CellValue::Text("untitled recipe".into()), false)]
    #[case(Presence::NotPlaceholderIgnoreCase("unknown"), CellValue::Text("UNKNOWN".into()), true)]
    #[case(Presence::NotPlaceholderIgnoreCase("unknown"), CellValue::Text("Thai".into()), false)]
    #[case(Presence::NonZero, CellValue::Number(0.0), true)]
    #[case(Presence::NonZero, CellValue::Number(4.0), false)]
    #[case(Presence::NonZero, CellValue::Text("four".into()), false)]
    fn presence_rules(#[case] rule: Presence, #[case] cell: CellValue, #[case] missing: bool) {
        assert_eq!(rule.is_missing(&cell), missing);
    }

    #[test]
    fn window_is_capped_by_last_row() {
        let window = ScanWindow::new(14, 100);
        assert_eq!(window.rows(40), 14..=40);
        assert_eq!(window.rows(500), 14..=100);
        assert!(window.rows(3).is_empty());
    }

    #[test]
    fn standard_header_coordinates() {
        let layout = RecipeLayout::standard();
        let coords: Vec<String> = layout.header.iter().map(|r| r.cell.to_string()).collect();
        assert_eq!(coords, vec!["B3", "B4", "H4", "B6"]);
    }

    #[test]
    fn unit_treats_zero_as_missing() {
        let layout = RecipeLayout::standard();
        let unit = layout.ingredients.columns.iter().find(|r| r.key == "unit").unwrap();
        assert!(unit.presence.is_missing(&CellValue::Number(0.0)));
        assert!(!unit.presence.is_missing(&CellValue::Text("kg".into())));
    }

    #[test]
    fn standard_ingredient_columns() {
        let layout = RecipeLayout::standard();
        let cols: Vec<u32> = layout.ingredients.columns.iter().map(|r| r.column).collect();
        assert_eq!(cols, vec![5, 6, 7]);
    }
}
