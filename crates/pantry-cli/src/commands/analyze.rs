use std::path::PathBuf;

use anyhow::Context;
use pantry_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pantry analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = match (&args.file, &args.recipe_id) {
        (Some(file), _) => PathBuf::from(file),
        (None, Some(id)) => {
            CoreError::check_recipe_id(id)?;
            let recipe = ctx
                .service
                .get_recipe(id)
                .await?
                .ok_or_else(|| CoreError::recipe_not_found(id))?;
            PathBuf::from(recipe.file_path)
        }
        (None, None) => anyhow::bail!("pass a recipe file or --recipe-id"),
    };

    let analysis = ctx
        .analyzer()
        .analyze_path(&path)
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    output(&analysis, flags.format)
}
