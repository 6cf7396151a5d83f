mod add;
mod list;
mod scan;

use std::path::Path;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogueCommands;
use crate::context::AppContext;

/// Handle `pantry catalogue`.
pub async fn handle(
    action: &CatalogueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogueCommands::Add { file, title } => add::run(file, title.as_deref(), ctx, flags).await,
        CatalogueCommands::List => list::run(ctx, flags).await,
        CatalogueCommands::Scan {
            directory,
            no_recursive,
        } => scan::run(directory, !no_recursive && ctx.config.scan.recursive, ctx, flags).await,
    }
}

/// Title derived from the file name without its extension.
fn default_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercase extension, or `unknown` when there is none.
fn file_type(path: &Path) -> String {
    path.extension()
        .map_or_else(|| "unknown".to_string(), |ext| ext.to_string_lossy().to_ascii_lowercase())
}
