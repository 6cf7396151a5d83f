use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use pantry_config::ScanConfig;
use serde::Serialize;

use super::{default_title, file_type};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ScanResponse {
    directory: String,
    recursive: bool,
    total_files: usize,
    recipe_files_found: usize,
    recipes_registered: usize,
    already_catalogued: usize,
    errors: Vec<String>,
}

/// Files seen by a directory walk.
#[derive(Debug, Default)]
struct FileScan {
    total_files: usize,
    recipe_files: Vec<PathBuf>,
    errors: Vec<String>,
}

pub async fn run(
    directory: &str,
    recursive: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let root = Path::new(directory);
    if !root.is_dir() {
        anyhow::bail!("directory not found: {directory}");
    }

    let spinner = Progress::scanning(directory);
    let scan = find_recipe_files(root, recursive, &ctx.config.scan);
    spinner.finish();

    let progress = Progress::recipes(scan.recipe_files.len(), "registering");
    let mut registered = 0;
    let mut existing = 0;
    let mut errors = scan.errors;
    for path in &scan.recipe_files {
        let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        progress.advance(&default_title(&absolute));
        match ctx
            .service
            .register_recipe(
                &default_title(&absolute),
                &absolute.to_string_lossy(),
                &file_type(&absolute),
            )
            .await
        {
            Ok(registration) if registration.created => registered += 1,
            Ok(_) => existing += 1,
            Err(error) => {
                tracing::warn!(path = %absolute.display(), %error, "failed to register recipe");
                errors.push(format!("{}: {error}", absolute.display()));
            }
        }
    }
    progress.finish();

    tracing::info!(
        directory,
        total_files = scan.total_files,
        found = scan.recipe_files.len(),
        registered,
        "directory scan complete"
    );

    output(
        &ScanResponse {
            directory: directory.to_string(),
            recursive,
            total_files: scan.total_files,
            recipe_files_found: scan.recipe_files.len(),
            recipes_registered: registered,
            already_catalogued: existing,
            errors,
        },
        flags.format,
    )
}

/// Walk `root` without ignore-file filtering and keep files whose extension
/// is in the configured recipe set. Paths come back sorted.
fn find_recipe_files(root: &Path, recursive: bool, config: &ScanConfig) -> FileScan {
    let mut scan = FileScan::default();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .max_depth(if recursive { None } else { Some(1) })
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|kind| kind.is_file()) {
                    continue;
                }
                scan.total_files += 1;
                if config.matches(entry.path()) {
                    scan.recipe_files.push(entry.into_path());
                }
            }
            Err(error) => scan.errors.push(error.to_string()),
        }
    }

    scan.recipe_files.sort();
    scan
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pantry_config::ScanConfig;
    use pretty_assertions::assert_eq;

    use super::find_recipe_files;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dirs");
        }
        std::fs::write(path, b"").expect("file should write");
    }

    fn names(root: &Path, paths: &[std::path::PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    #[test]
    fn recursive_scan_keeps_recipe_extensions() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        touch(temp.path(), "soup.xlsx");
        touch(temp.path(), "notes.PDF");
        touch(temp.path(), "photo.jpg");
        touch(temp.path(), "desserts/tart.xlsx");

        let scan = find_recipe_files(temp.path(), true, &ScanConfig::default());
        assert_eq!(scan.total_files, 4);
        assert_eq!(
            names(temp.path(), &scan.recipe_files),
            vec!["desserts/tart.xlsx", "notes.PDF", "soup.xlsx"]
        );
        assert!(scan.errors.is_empty());
    }

    #[test]
    fn flat_scan_skips_subdirectories() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        touch(temp.path(), "soup.xlsx");
        touch(temp.path(), "desserts/tart.xlsx");

        let scan = find_recipe_files(temp.path(), false, &ScanConfig::default());
        assert_eq!(scan.total_files, 1);
        assert_eq!(names(temp.path(), &scan.recipe_files), vec!["soup.xlsx"]);
    }

    #[test]
    fn ignore_files_and_hidden_files_are_not_honoured() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        touch(temp.path(), ".gitignore");
        std::fs::write(temp.path().join(".gitignore"), "*.xlsx\n").expect("gitignore");
        touch(temp.path(), "soup.xlsx");
        touch(temp.path(), ".hidden.xlsx");

        let scan = find_recipe_files(temp.path(), true, &ScanConfig::default());
        assert_eq!(scan.recipe_files.len(), 2);
    }
}
