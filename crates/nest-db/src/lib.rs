//! # nest-db
//!
//! libSQL persistent store for Tasknest.
//!
//! Handles all durable state: tasks, subtasks, and profiles, scoped per user.
//! The store is the sole source of truth; the manager re-fetches after every
//! mutation instead of patching its mirror in place.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) — stable API, native
//! foreign-key enforcement for the subtask cascade.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;
#[cfg(test)]
mod test_support;

use error::StoreError;
use libsql::Builder;

/// Central database handle for all Tasknest state operations.
///
/// Wraps a libSQL database and connection, and provides prefixed ID
/// generation. Repository methods live on [`store::NestStore`].
pub struct NestDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl NestDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on first open. Pass `":memory:"` for
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite); the
        // subtask cascade depends on it.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let nest_db = Self { db, conn };
        nest_db.run_migrations().await?;
        Ok(nest_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tsk-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
