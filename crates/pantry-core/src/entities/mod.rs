//! Entity structs for Pantry domain objects.
//!
//! Catalogue entities map to tables in the libSQL database; audit entities are
//! built fresh per audit run and never persisted. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod analysis;
mod issue;
mod recipe;
mod schema_field;

pub use analysis::RecipeAnalysis;
pub use issue::Issue;
pub use recipe::{CatalogueEntry, Recipe};
pub use schema_field::SchemaField;
