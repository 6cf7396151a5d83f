//! Repository modules implementing catalogue operations.
//!
//! Each module adds methods to `CatalogueService` via `impl CatalogueService` blocks.

pub mod recipe;
