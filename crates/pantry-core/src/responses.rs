//! Response types returned as JSON by `pantry` commands.
//!
//! `LibraryAuditSummary` is the output contract of a library-wide audit; the
//! text report and the `audit` command both consume it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{RecipeAnalysis, SchemaField};

/// A catalogue entry whose analysis could not be produced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditFailure {
    pub entry_id: String,
    pub title: String,
    pub file_path: String,
    pub error: String,
}

/// Response from `pantry audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LibraryAuditSummary {
    /// Number of catalogue entries audited, failed entries included.
    pub total_recipes: usize,
    /// Successful analyses, in catalogue order.
    pub analyses: Vec<RecipeAnalysis>,
    /// Entries that could not be analyzed, in catalogue order.
    pub failures: Vec<AuditFailure>,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub average_completeness: f64,
}

/// Response from `pantry schema`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SchemaResponse {
    pub total_fields: usize,
    pub fields: Vec<SchemaField>,
}
