//! Library-wide audit: a sequential fold over catalogue entries.

use std::path::Path;

use pantry_core::entities::{CatalogueEntry, RecipeAnalysis};
use pantry_core::enums::Severity;
use pantry_core::responses::{AuditFailure, LibraryAuditSummary};

use crate::analyzer::RecipeAnalyzer;
use crate::error::AnalysisError;
use crate::loader::GridLoader;

/// Runs a [`RecipeAnalyzer`] over every catalogue entry and aggregates.
#[derive(Debug, Clone)]
pub struct LibraryAuditor<L> {
    analyzer: RecipeAnalyzer<L>,
}

impl<L: GridLoader> LibraryAuditor<L> {
    #[must_use]
    pub const fn new(analyzer: RecipeAnalyzer<L>) -> Self {
        Self { analyzer }
    }

    #[must_use]
    pub const fn analyzer(&self) -> &RecipeAnalyzer<L> {
        &self.analyzer
    }

    /// Audit every entry in order.
    #[must_use]
    pub fn audit_all(&self, entries: &[CatalogueEntry]) -> LibraryAuditSummary {
        self.audit_all_with(entries, |_, _| {})
    }

    /// Audit every entry in order, reporting each outcome to `observer` as it
    /// is produced.
    ///
    /// A failed entry is recorded in `failures` and left out of the severity
    /// tallies and the score sum, but still counts towards `total_recipes`.
    pub fn audit_all_with<F>(&self, entries: &[CatalogueEntry], mut observer: F) -> LibraryAuditSummary
    where
        F: FnMut(&CatalogueEntry, Result<&RecipeAnalysis, &AnalysisError>),
    {
        let mut analyses = Vec::with_capacity(entries.len());
        let mut failures = Vec::new();
        let (mut high_count, mut medium_count, mut low_count) = (0, 0, 0);
        let mut score_sum = 0.0;

        for entry in entries {
            match self.analyzer.analyze_path(Path::new(&entry.file_path)) {
                Ok(analysis) => {
                    observer(entry, Ok(&analysis));
                    high_count += analysis.count_severity(Severity::High);
                    medium_count += analysis.count_severity(Severity::Medium);
                    low_count += analysis.count_severity(Severity::Low);
                    score_sum += analysis.completeness_score;
                    analyses.push(analysis);
                }
                Err(error) => {
                    observer(entry, Err(&error));
                    tracing::warn!(id = %entry.id, path = %entry.file_path, %error, "recipe analysis failed");
                    failures.push(AuditFailure {
                        entry_id: entry.id.clone(),
                        title: entry.title.clone(),
                        file_path: entry.file_path.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        let total_recipes = entries.len();
        let average_completeness = average(score_sum, total_recipes);
        tracing::info!(
            total_recipes,
            analyzed = analyses.len(),
            failed = failures.len(),
            average_completeness,
            "library audit complete"
        );

        LibraryAuditSummary {
            total_recipes,
            analyses,
            failures,
            high_count,
            medium_count,
            low_count,
            average_completeness,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}
