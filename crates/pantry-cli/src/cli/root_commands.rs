use clap::{Args, Subcommand};

use crate::cli::subcommands::CatalogueCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze one recipe document for missing information.
    Analyze(AnalyzeArgs),
    /// Audit every catalogued recipe.
    Audit,
    /// Write a human-readable missing-information report.
    Report(ReportArgs),
    /// Recipe catalogue management.
    Catalogue {
        #[command(subcommand)]
        action: CatalogueCommands,
    },
    /// Print the required-field registry.
    Schema,
}

/// Arguments for `pantry analyze`.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct AnalyzeArgs {
    /// Recipe document to analyze.
    pub file: Option<String>,
    /// Catalogued recipe to analyze.
    #[arg(long)]
    pub recipe_id: Option<String>,
}

/// Arguments for `pantry report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}
