//! # pantry-config
//!
//! Layered configuration loading for Pantry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PANTRY_*` prefix, `__` as separator)
//! 2. Project-level `.pantry/config.toml`
//! 3. User-level `~/.config/pantry/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PANTRY_LIBRARY__DB_PATH` -> `library.db_path`,
//! `PANTRY_SCAN__RECURSIVE` -> `scan.recursive`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pantry_config::PantryConfig;
//!
//! let config = PantryConfig::load_for_project(std::path::Path::new(".")).expect("config");
//! println!("catalogue: {}", config.library.db_path);
//! ```

mod error;
mod general;
mod library;
mod scan;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use library::LibraryConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".pantry";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PantryConfig {
    /// Load configuration using `<project_root>/.pantry/config.toml` as the
    /// project layer. `.env` files are the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for a project root.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PANTRY_").split("__"))
    }

    /// Reject values that would make commands misbehave silently.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library.db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "library.db_path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.extensions".into(),
                reason: "at least one extension is required".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pantry").join("config.toml"))
    }
}
