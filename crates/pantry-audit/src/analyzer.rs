//! Single-recipe analysis.

use std::path::{Path, PathBuf};

use pantry_core::entities::RecipeAnalysis;

use crate::checks::check_all;
use crate::error::AnalysisError;
use crate::grid::Grid;
use crate::layout::RecipeLayout;
use crate::loader::{GridLoader, SpreadsheetLoader};
use crate::locator::FieldLocator;
use crate::schema::CompletenessSchema;
use crate::score::completeness_score;

/// Warning attached when no canonical copy of the recipe exists.
pub const NOT_CONVERTED_WARNING: &str = "Recipe not yet converted to canonical format";

/// Loads one recipe document, runs the section checkers and scores it.
#[derive(Debug, Clone)]
pub struct RecipeAnalyzer<L> {
    schema: CompletenessSchema,
    layout: RecipeLayout,
    loader: L,
    converted_dir: Option<PathBuf>,
}

impl RecipeAnalyzer<SpreadsheetLoader> {
    /// Standard schema and layout over the `calamine` loader.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            CompletenessSchema::standard(),
            RecipeLayout::standard(),
            SpreadsheetLoader::new(),
        )
    }
}

impl<L: GridLoader> RecipeAnalyzer<L> {
    #[must_use]
    pub const fn new(schema: CompletenessSchema, layout: RecipeLayout, loader: L) -> Self {
        Self {
            schema,
            layout,
            loader,
            converted_dir: None,
        }
    }

    /// Warn about recipes with no `<dir>/<stem>.xlsx` canonical copy.
    #[must_use]
    pub fn with_converted_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.converted_dir = Some(dir.into());
        self
    }

    /// Analyze the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::PathNotFound` if the file does not exist and
    /// `AnalysisError::DocumentLoad` if it cannot be loaded as a grid.
    pub fn analyze_path(&self, path: &Path) -> Result<RecipeAnalysis, AnalysisError> {
        if !path.exists() {
            return Err(AnalysisError::PathNotFound(path.to_path_buf()));
        }
        let grid = self
            .loader
            .load(path)
            .map_err(|source| AnalysisError::DocumentLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.analyze_grid(path, &grid))
    }

    /// Analyze an already loaded grid. Never fails: missing sections are issues.
    #[must_use]
    pub fn analyze_grid(&self, path: &Path, grid: &Grid) -> RecipeAnalysis {
        let issues = check_all(&self.layout, &FieldLocator::new(grid));
        let completeness_score = completeness_score(self.schema.total_fields(), issues.len());
        let recipe_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut warnings = Vec::new();
        if let Some(dir) = &self.converted_dir {
            if !dir.join(format!("{recipe_name}.xlsx")).exists() {
                warnings.push(NOT_CONVERTED_WARNING.to_string());
            }
        }

        tracing::debug!(
            path = %path.display(),
            issues = issues.len(),
            score = completeness_score,
            "recipe analyzed"
        );

        RecipeAnalysis {
            file_path: path.display().to_string(),
            recipe_name,
            issues,
            warnings,
            completeness_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use pretty_assertions::assert_eq;

    struct FixedLoader(Grid);

    impl GridLoader for FixedLoader {
        fn load(&self, _path: &Path) -> Result<Grid, LoadError> {
            Ok(self.0.clone())
        }
    }

    fn analyzer(grid: Grid) -> RecipeAnalyzer<FixedLoader> {
        RecipeAnalyzer::new(
            CompletenessSchema::standard(),
            RecipeLayout::standard(),
            FixedLoader(grid),
        )
    }

    #[test]
    fn missing_file_is_path_not_found() {
        let err = analyzer(Grid::new())
            .analyze_path(Path::new("/nonexistent/pantry/soup.xlsx"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::PathNotFound(_)));
    }

    #[test]
    fn blank_grid_scores_six_issues() {
        let analysis = analyzer(Grid::new()).analyze_grid(Path::new("/r/Lemon Tart.xlsx"), &Grid::new());
        assert_eq!(analysis.recipe_name, "Lemon Tart");
        assert_eq!(analysis.issues.len(), 6);
        let expected = 12.0 / 18.0 * 100.0;
        assert!((analysis.completeness_score - expected).abs() < 1e-9);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn unconverted_recipe_is_warned() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer(Grid::new()).with_converted_dir(dir.path());

        let analysis = analyzer.analyze_grid(Path::new("/r/tart.xlsx"), &Grid::new());
        assert_eq!(analysis.warnings, vec![NOT_CONVERTED_WARNING.to_string()]);

        std::fs::write(dir.path().join("tart.xlsx"), b"").unwrap();
        let analysis = analyzer.analyze_grid(Path::new("/r/tart.pdf"), &Grid::new());
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn existing_file_goes_through_loader() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let analysis = analyzer(Grid::new()).analyze_path(file.path()).unwrap();
        assert_eq!(analysis.file_path, file.path().display().to_string());
        assert_eq!(analysis.issues.len(), 6);
    }
}
