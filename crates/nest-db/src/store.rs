//! Store handle hosting the typed repository methods.
//!
//! `NestStore` wraps [`NestDb`] (raw database access). All repo methods are
//! implemented as `impl NestStore` blocks in [`crate::repos`]. Every method is
//! scoped by the calling user's ID: a row owned by another user behaves
//! exactly like a missing row (`StoreError::NoResult`).

use crate::NestDb;
use crate::error::StoreError;

/// Persistent store for tasks, subtasks, and profiles.
pub struct NestStore {
    db: NestDb,
}

impl NestStore {
    /// Open a store backed by a local database file.
    ///
    /// Pass `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn open_local(db_path: &str) -> Result<Self, StoreError> {
        let db = NestDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `NestDb` (for testing).
    #[must_use]
    pub const fn from_db(db: NestDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &NestDb {
        &self.db
    }
}
