//! Recipe library locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    ".pantry/catalogue.db".to_string()
}

fn default_converted_dir() -> String {
    "converted".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Catalogue database file. Relative paths resolve against the project root.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory holding recipes already converted to the canonical format.
    /// Empty disables the "not yet converted" warning.
    #[serde(default = "default_converted_dir")]
    pub converted_dir: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            converted_dir: default_converted_dir(),
        }
    }
}

impl LibraryConfig {
    /// Absolute-or-root-relative path of the catalogue database.
    #[must_use]
    pub fn resolve_db_path(&self, project_root: &Path) -> PathBuf {
        resolve(project_root, &self.db_path)
    }

    /// Converted-recipes directory, or `None` when the check is disabled.
    #[must_use]
    pub fn resolve_converted_dir(&self, project_root: &Path) -> Option<PathBuf> {
        if self.converted_dir.trim().is_empty() {
            None
        } else {
            Some(resolve(project_root, &self.converted_dir))
        }
    }
}

fn resolve(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
