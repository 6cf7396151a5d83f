use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::audit::run_library_audit;
use crate::context::AppContext;
use crate::report::render_report;

/// Handle `pantry report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = run_library_audit(ctx).await?;
    let report = render_report(&summary, &chrono::Local::now());

    match &args.output {
        Some(file) => {
            let path = Path::new(file);
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
            println!("Report generated: {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}
