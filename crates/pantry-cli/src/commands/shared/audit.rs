use pantry_core::responses::LibraryAuditSummary;

use crate::context::AppContext;
use crate::progress::Progress;

/// Read the catalogue, then audit every entry with a progress bar.
pub async fn run_library_audit(ctx: &AppContext) -> anyhow::Result<LibraryAuditSummary> {
    let entries = ctx.service.list_catalogue_entries().await?;
    let auditor = pantry_audit::LibraryAuditor::new(ctx.analyzer());

    let progress = Progress::recipes(entries.len(), "auditing");
    let summary = auditor.audit_all_with(&entries, |entry, _| progress.advance(&entry.title));
    progress.finish();

    Ok(summary)
}
