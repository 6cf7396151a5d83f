//! # pantry-audit
//!
//! Completeness auditing for recipe spreadsheets.
//!
//! A recipe document is loaded into a [`Grid`], a [`RecipeLayout`] tells the
//! section checkers where each required field lives, and the number of issues
//! found is scored against a [`CompletenessSchema`]. [`LibraryAuditor`] folds
//! per-recipe analyses into a library summary.
//!
//! ```no_run
//! use std::path::Path;
//! use pantry_audit::RecipeAnalyzer;
//!
//! let analysis = RecipeAnalyzer::standard()
//!     .analyze_path(Path::new("recipes/shortbread.xlsx"))
//!     .expect("analysis");
//! println!("{}: {:.1}%", analysis.recipe_name, analysis.completeness_score);
//! ```

pub mod analyzer;
pub mod auditor;
pub mod checks;
pub mod error;
pub mod grid;
pub mod layout;
pub mod loader;
pub mod locator;
pub mod schema;
pub mod score;

pub use analyzer::{NOT_CONVERTED_WARNING, RecipeAnalyzer};
pub use auditor::LibraryAuditor;
pub use error::{AddressError, AnalysisError, LoadError};
pub use grid::{CellRef, CellValue, Grid};
pub use layout::RecipeLayout;
pub use loader::{GridLoader, SPREADSHEET_EXTENSIONS, SpreadsheetLoader};
pub use locator::FieldLocator;
pub use schema::CompletenessSchema;
pub use score::completeness_score;
