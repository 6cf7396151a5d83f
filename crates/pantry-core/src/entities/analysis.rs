use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::Severity;

/// Completeness audit of a single recipe document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecipeAnalysis {
    pub file_path: String,
    pub recipe_name: String,
    pub issues: Vec<Issue>,
    pub warnings: Vec<String>,
    /// Percentage in `[0, 100]`.
    pub completeness_score: f64,
}

impl RecipeAnalysis {
    /// Number of issues with the given severity.
    #[must_use]
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// Whether every required field was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}
