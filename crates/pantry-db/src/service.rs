//! Service layer over the catalogue database.
//!
//! `CatalogueService` wraps `PantryDb`; repository methods are implemented as
//! `impl CatalogueService` blocks under `repos/`.

use crate::PantryDb;
use crate::error::DatabaseError;

/// Catalogue access for commands and the library auditor.
pub struct CatalogueService {
    db: PantryDb,
}

impl CatalogueService {
    /// Open a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PantryDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `PantryDb` (for testing).
    #[must_use]
    pub const fn from_db(db: PantryDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PantryDb {
        &self.db
    }
}
