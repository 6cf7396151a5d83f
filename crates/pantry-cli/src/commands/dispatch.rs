use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Audit => commands::audit::handle(ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::Catalogue { action } => commands::catalogue::handle(&action, ctx, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
