//! # pantry-db
//!
//! libSQL catalogue of recipe documents for Pantry.
//!
//! Records every registered recipe file (title, path, file type) and hands the
//! ordered catalogue to the completeness auditor. The auditor never writes
//! here; the catalogue is opened once per command and dropped afterwards.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for catalogue operations.
pub struct PantryDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PantryDb {
    /// Open a local database at the given path, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let pantry_db = Self { db, conn };
        pantry_db.run_migrations().await?;
        tracing::debug!(path, "catalogue database opened");
        Ok(pantry_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rcp-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(4)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let suffix = row.get::<String>(0)?;
        Ok(pantry_core::ids::format_id(prefix, &suffix))
    }
}
