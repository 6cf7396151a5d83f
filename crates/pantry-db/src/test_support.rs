//! Shared test utilities for pantry-db unit tests.

pub(crate) mod helpers {
    use crate::PantryDb;
    use crate::service::CatalogueService;

    /// Create an in-memory service for pure DB tests.
    pub async fn test_service() -> CatalogueService {
        let db = PantryDb::open_local(":memory:").await.unwrap();
        CatalogueService::from_db(db)
    }
}
