//! Shared test utilities for nest-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::NestDb;
    use crate::store::NestStore;

    /// Create an in-memory store.
    pub async fn test_store() -> NestStore {
        let db = NestDb::open_local(":memory:").await.unwrap();
        NestStore::from_db(db)
    }
}
