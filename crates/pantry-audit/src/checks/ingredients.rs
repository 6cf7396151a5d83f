//! Per-ingredient column checks.

use pantry_core::entities::Issue;
use pantry_core::enums::Section;

use crate::grid::{CellRef, column_letters};
use crate::layout::IngredientLayout;
use crate::locator::FieldLocator;

/// Per-row column checks over the ingredient window, or a single
/// table-level issue when the window holds no ingredient rows.
#[must_use]
pub fn check_ingredients(layout: &IngredientLayout, locator: &FieldLocator<'_>) -> Vec<Issue> {
    let rows = locator.find_ingredient_rows(
        layout.name_column,
        layout.window.start_row,
        layout.window.max_row,
        layout.sentinels,
    );

    if rows.is_empty() {
        let missing = &layout.missing_table;
        return vec![Issue {
            section: Section::Ingredients,
            field: missing.key.to_string(),
            label: missing.label.to_string(),
            location: missing.location.to_string(),
            severity: missing.severity,
            ingredient: None,
        }];
    }

    let mut issues = Vec::new();
    for row in &rows {
        for rule in &layout.columns {
            let cell = CellRef::new(row.row, rule.column);
            if rule.presence.is_missing(locator.grid().get(cell)) {
                issues.push(Issue {
                    section: Section::Ingredients,
                    field: rule.key.to_string(),
                    label: format!("{} for {}", rule.label, row.name),
                    location: format!("{}{}", column_letters(rule.column), row.row),
                    severity: rule.severity,
                    ingredient: Some(row.name.clone()),
                });
            }
        }
    }
    issues
}
