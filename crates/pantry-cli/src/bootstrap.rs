use std::path::Path;

use anyhow::Context;
use pantry_config::PantryConfig;

/// Load `.env` (project root first, then the current directory) and the
/// layered configuration for `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<PantryConfig> {
    load_project_dotenv(project_root)?;
    PantryConfig::load_for_project(project_root)
        .with_context(|| format!("failed to load configuration for {}", project_root.display()))
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load dotenv file"),
    }
}
