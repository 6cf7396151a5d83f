use pantry_core::entities::Recipe;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RecipeListResponse {
    recipes: Vec<Recipe>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let recipes = ctx.service.list_recipes(limit).await?;
    output(&RecipeListResponse { recipes }, flags.format)
}
