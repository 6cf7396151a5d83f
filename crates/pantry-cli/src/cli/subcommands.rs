use clap::Subcommand;

/// Catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogueCommands {
    /// Register a recipe document.
    Add {
        file: String,
        /// Display title (defaults to the file name without extension).
        #[arg(long)]
        title: Option<String>,
    },
    /// List catalogued recipes.
    List,
    /// Register every recipe file under a directory.
    Scan {
        directory: String,
        /// Only scan the top level of the directory.
        #[arg(long)]
        no_recursive: bool,
    },
}
