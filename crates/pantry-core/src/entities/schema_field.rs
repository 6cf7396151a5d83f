use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Section;

/// One required field of a complete recipe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct SchemaField {
    pub section: Section,
    pub key: String,
    pub label: String,
}

impl SchemaField {
    #[must_use]
    pub fn new(section: Section, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            section,
            key: key.into(),
            label: label.into(),
        }
    }
}
