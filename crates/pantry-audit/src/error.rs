//! Error types for grid loading and recipe analysis.
//!
//! Missing recipe sections are never errors; they surface as issues. Errors
//! here mean a recipe could not be analyzed at all.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed A1 coordinate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid cell address: '{0}'")]
    Invalid(String),
}

/// Failure to turn a document into a grid.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension is not a spreadsheet format the loader reads.
    #[error("Unsupported document format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook could not be opened or parsed.
    #[error("Failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook contains no worksheet.
    #[error("Workbook {} has no worksheets", path.display())]
    NoWorksheet { path: PathBuf },
}

/// Failure to analyze a single recipe. Isolated per catalogue entry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The recipe's backing file does not exist.
    #[error("Recipe file not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The document exists but could not be loaded as a grid.
    #[error("Failed to load {}: {source}", path.display())]
    DocumentLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}
