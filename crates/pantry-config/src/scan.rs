//! Directory scan settings for cataloguing recipe files.

use std::path::Path;

use serde::{Deserialize, Serialize};

const fn default_recursive() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    [
        "xlsx", "xls", "csv", "pdf", "txt", "docx", "doc", "json", "html", "htm", "md", "rtf",
    ]
    .iter()
    .map(|ext| (*ext).to_string())
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Whether `catalogue scan` descends into subdirectories.
    #[serde(default = "default_recursive")]
    pub recursive: bool,

    /// File extensions (without the dot) treated as recipe documents.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recursive: default_recursive(),
            extensions: default_extensions(),
        }
    }
}

impl ScanConfig {
    /// Whether the file's extension is one of the configured recipe extensions.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}
