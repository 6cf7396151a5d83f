//! Recipe catalogue repository.
//!
//! Registration is idempotent on `file_path`: registering the same document
//! twice returns the existing row.

use chrono::Utc;
use pantry_core::entities::{CatalogueEntry, Recipe};
use pantry_core::ids::PREFIX_RECIPE;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::CatalogueService;

const RECIPE_COLUMNS: &str = "id, title, file_path, file_type, created_at";

fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        file_path: row.get::<String>(2)?,
        file_type: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// Outcome of registering a recipe document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub recipe: Recipe,
    /// `false` when the path was already catalogued.
    pub created: bool,
}

impl CatalogueService {
    /// Register a recipe document, or return the existing row for its path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert or the follow-up lookup fails.
    pub async fn register_recipe(
        &self,
        title: &str,
        file_path: &str,
        file_type: &str,
    ) -> Result<Registration, DatabaseError> {
        let id = self.db().generate_id(PREFIX_RECIPE).await?;
        let now = Utc::now().to_rfc3339();

        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO recipes (id, title, file_path, file_type, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(file_path) DO NOTHING",
                libsql::params![id.as_str(), title, file_path, file_type, now.as_str()],
            )
            .await?;

        let recipe = self
            .get_recipe_by_path(file_path)
            .await?
            .ok_or(DatabaseError::NoResult)?;

        if inserted > 0 {
            tracing::debug!(id = %recipe.id, file_path, "recipe registered");
        }

        Ok(Registration {
            recipe,
            created: inserted > 0,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_recipe(&row)?)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_recipe_by_path(&self, file_path: &str) -> Result<Option<Recipe>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE file_path = ?1"),
                [file_path],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_recipe(&row)?)),
            None => Ok(None),
        }
    }

    /// List recipes in registration order, newest last.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_recipes(&self, limit: u32) -> Result<Vec<Recipe>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY rowid LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_recipe(&row)?);
        }
        Ok(results)
    }

    /// The full catalogue in registration order, as consumed by an audit run.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_catalogue_entries(&self) -> Result<Vec<CatalogueEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, file_path FROM recipes ORDER BY rowid",
                (),
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(CatalogueEntry {
                id: row.get::<String>(0)?,
                title: row.get::<String>(1)?,
                file_path: row.get::<String>(2)?,
            });
        }
        Ok(entries)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_recipes(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM recipes", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }
}
