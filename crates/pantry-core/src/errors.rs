//! Cross-cutting error types for Pantry.
//!
//! Domain-specific errors (`DatabaseError`, `AnalysisError`, ...) are defined in
//! their respective crates. `anyhow` is only used where everything converges in
//! `pantry-cli`.

use crate::ids::{PREFIX_RECIPE, prefix_of};

use thiserror::Error;

/// Errors that can be raised by any Pantry crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Reject IDs that do not carry the recipe prefix.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the malformed ID.
    pub fn check_recipe_id(id: &str) -> Result<(), Self> {
        if prefix_of(id) == Some(PREFIX_RECIPE) {
            Ok(())
        } else {
            Err(Self::Validation(format!(
                "'{id}' is not a recipe ID (expected {PREFIX_RECIPE}-xxxxxxxx)"
            )))
        }
    }

    #[must_use]
    pub fn recipe_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "recipe".to_string(),
            id: id.to_string(),
        }
    }
}
