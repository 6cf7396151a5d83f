use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A recipe document recorded in the library catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub file_path: String,
    /// Lowercase file extension without the dot (`xlsx`, `pdf`, ...).
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

/// The slice of a catalogued recipe an audit run needs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub id: String,
    pub title: String,
    pub file_path: String,
}

impl From<Recipe> for CatalogueEntry {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            file_path: recipe.file_path,
        }
    }
}
