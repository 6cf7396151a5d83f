use pantry_core::enums::Severity;
use pantry_core::responses::LibraryAuditSummary;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::audit::run_library_audit;
use crate::context::AppContext;
use crate::output::output;

/// One line of the tabular audit view.
#[derive(Debug, Serialize)]
struct AuditRow {
    recipe: String,
    completeness: String,
    high: usize,
    medium: usize,
    low: usize,
    warnings: usize,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct AuditTable {
    recipes: Vec<AuditRow>,
}

/// Handle `pantry audit`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = run_library_audit(ctx).await?;
    if flags.format == OutputFormat::Table {
        output(&audit_table(&summary), flags.format)
    } else {
        output(&summary, flags.format)
    }
}

fn audit_table(summary: &LibraryAuditSummary) -> AuditTable {
    let analyzed = summary.analyses.iter().map(|analysis| AuditRow {
        recipe: analysis.recipe_name.clone(),
        completeness: format!("{:.1}%", analysis.completeness_score),
        high: analysis.count_severity(Severity::High),
        medium: analysis.count_severity(Severity::Medium),
        low: analysis.count_severity(Severity::Low),
        warnings: analysis.warnings.len(),
        status: if analysis.is_complete() { "complete" } else { "incomplete" },
    });
    let failed = summary.failures.iter().map(|failure| AuditRow {
        recipe: failure.title.clone(),
        completeness: "-".into(),
        high: 0,
        medium: 0,
        low: 0,
        warnings: 0,
        status: "failed",
    });
    AuditTable {
        recipes: analyzed.chain(failed).collect(),
    }
}
