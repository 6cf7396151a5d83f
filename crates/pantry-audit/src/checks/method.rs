//! Method heading and instruction checks.

use pantry_core::entities::Issue;
use pantry_core::enums::Section;

use crate::grid::column_letters;
use crate::layout::MethodLayout;
use crate::locator::FieldLocator;

/// Checks that a method heading exists and is followed by instructions.
///
/// Only the first marker in the window is evaluated.
#[must_use]
pub fn check_method(layout: &MethodLayout, locator: &FieldLocator<'_>) -> Vec<Issue> {
    let Some(marker_row) = locator.find_method_marker_row(
        layout.marker_column,
        layout.window.start_row,
        layout.window.max_row,
        layout.marker,
    ) else {
        let missing = &layout.missing_section;
        return vec![Issue {
            section: Section::Method,
            field: missing.key.to_string(),
            label: missing.label.to_string(),
            location: missing.location.to_string(),
            severity: missing.severity,
            ingredient: None,
        }];
    };

    let first = marker_row + 1;
    if locator.any_filled(layout.marker_column, first, marker_row + layout.instructions_span) {
        return Vec::new();
    }

    vec![Issue {
        section: Section::Method,
        field: layout.missing_instructions_key.to_string(),
        label: layout.missing_instructions_label.to_string(),
        location: format!("{}{first}+", column_letters(layout.marker_column)),
        severity: layout.missing_instructions_severity,
        ingredient: None,
    }]
}
