use std::path::Path;

use anyhow::Context;
use pantry_core::entities::Recipe;
use serde::Serialize;

use super::{default_title, file_type};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AddResponse {
    recipe: Recipe,
    created: bool,
}

pub async fn run(
    file: &str,
    title: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = std::fs::canonicalize(Path::new(file))
        .with_context(|| format!("recipe file not found: {file}"))?;
    let title = title.map_or_else(|| default_title(&path), str::to_string);

    let registration = ctx
        .service
        .register_recipe(&title, &path.to_string_lossy(), &file_type(&path))
        .await?;

    output(
        &AddResponse {
            recipe: registration.recipe,
            created: registration.created,
        },
        flags.format,
    )
}
