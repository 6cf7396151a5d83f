//! Header checks against fixed coordinates.

use pantry_core::entities::Issue;
use pantry_core::enums::Section;

use crate::layout::HeaderRule;
use crate::locator::FieldLocator;

/// One issue per header rule whose cell fails its presence test.
#[must_use]
pub fn check_header(rules: &[HeaderRule], locator: &FieldLocator<'_>) -> Vec<Issue> {
    rules
        .iter()
        .filter(|rule| rule.presence.is_missing(locator.header_value(rule.cell)))
        .map(|rule| Issue {
            section: Section::Header,
            field: rule.key.to_string(),
            label: rule.label.to_string(),
            location: rule.cell.to_string(),
            severity: rule.severity,
            ingredient: None,
        })
        .collect()
}
