use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Section, Severity};

/// A missing or placeholder field found while auditing a recipe.
///
/// `location` is an A1 coordinate (`B3`), an open range (`A21+`), or a
/// free-form hint (`Row 14+`) when the field could not be located at all.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    pub section: Section,
    pub field: String,
    pub label: String,
    pub location: String,
    pub severity: Severity,
    /// Ingredient the issue belongs to, for per-row ingredient gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
}
