use std::path::PathBuf;

use anyhow::Context;
use pantry_audit::{RecipeAnalyzer, SpreadsheetLoader};
use pantry_config::PantryConfig;
use pantry_db::service::CatalogueService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CatalogueService,
    pub config: PantryConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the catalogue at the configured path, creating its directory.
    pub async fn init(project_root: PathBuf, config: PantryConfig) -> anyhow::Result<Self> {
        let db_path = config.library.resolve_db_path(&project_root);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create catalogue directory {}", parent.display())
            })?;
        }

        let service = CatalogueService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open catalogue at {}", db_path.display()))?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }

    /// Standard analyzer, warning about unconverted recipes when a converted
    /// directory is configured.
    #[must_use]
    pub fn analyzer(&self) -> RecipeAnalyzer<SpreadsheetLoader> {
        let analyzer = RecipeAnalyzer::standard();
        match self.config.library.resolve_converted_dir(&self.project_root) {
            Some(dir) => analyzer.with_converted_dir(dir),
            None => analyzer,
        }
    }
}
