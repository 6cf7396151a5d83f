//! Document loading into a [`Grid`].

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::LoadError;
use crate::grid::{CellRef, CellValue, Grid};

/// Extensions [`SpreadsheetLoader`] opens.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Turns a document path into a grid. Implementations must not modify the
/// document.
pub trait GridLoader {
    /// # Errors
    ///
    /// Returns `LoadError` when the document is not a readable grid.
    fn load(&self, path: &Path) -> Result<Grid, LoadError>;
}

/// Reads the first worksheet of a workbook with `calamine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetLoader;

impl SpreadsheetLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether the path has an extension this loader reads.
    #[must_use]
    pub fn supports(path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.as_str()))
    }
}

impl GridLoader for SpreadsheetLoader {
    fn load(&self, path: &Path) -> Result<Grid, LoadError> {
        if !Self::supports(path) {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension_of(path).unwrap_or_default(),
            });
        }

        let workbook_error = |source| LoadError::Workbook {
            path: path.to_path_buf(),
            source,
        };
        let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::NoWorksheet {
                path: path.to_path_buf(),
            })?
            .map_err(workbook_error)?;

        let mut grid = Grid::new();
        if let (Some((start_row, start_col)), Some((end_row, _))) = (range.start(), range.end()) {
            for (row, col, data) in range.used_cells() {
                let (Ok(row), Ok(col)) = (u32::try_from(row), u32::try_from(col)) else {
                    continue;
                };
                grid.set(
                    CellRef::new(start_row + row + 1, start_col + col + 1),
                    cell_value(data),
                );
            }
            grid.extend_to_row(end_row + 1);
        }

        tracing::debug!(
            path = %path.display(),
            last_row = grid.last_row(),
            cells = grid.filled_cells(),
            "worksheet loaded"
        );
        Ok(grid)
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

#[allow(clippy::cast_precision_loss)]
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Error(e) => CellValue::text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("recipes/soup.xlsx", true)]
    #[case("recipes/SOUP.XLS", true)]
    #[case("recipes/soup.ods", true)]
    #[case("recipes/soup.pdf", false)]
    #[case("recipes/soup", false)]
    fn supported_extensions(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(SpreadsheetLoader::supports(Path::new(path)), expected);
    }

    #[test]
    fn unsupported_format_is_a_load_error() {
        let err = SpreadsheetLoader::new()
            .load(&PathBuf::from("notes/soup.docx"))
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnsupportedFormat { ref extension, .. } if extension == "docx"
        ));
    }

    #[test]
    fn missing_workbook_is_a_workbook_error() {
        let err = SpreadsheetLoader::new()
            .load(Path::new("/nonexistent/pantry/soup.xlsx"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Workbook { .. }));
    }

    #[rstest]
    #[case(Data::Empty, CellValue::Empty)]
    #[case(Data::String("  ".into()), CellValue::Empty)]
    #[case(Data::String("Salt".into()), CellValue::Text("Salt".into()))]
    #[case(Data::Int(4), CellValue::Number(4.0))]
    #[case(Data::Float(0.85), CellValue::Number(0.85))]
    #[case(Data::Bool(false), CellValue::Number(0.0))]
    fn data_conversion(#[case] data: Data, #[case] expected: CellValue) {
        assert_eq!(cell_value(&data), expected);
    }
}
