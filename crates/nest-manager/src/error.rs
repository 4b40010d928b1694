//! Manager error types — where store and remote failures converge for the
//! caller.

use thiserror::Error;

use nest_db::error::StoreError;
use nest_remote::RemoteError;

/// Errors surfaced by [`crate::TaskManager`] operations.
///
/// Operations are atomic from the caller's point of view: on any error the
/// in-memory mirror is left unchanged.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Input failed validation (empty or whitespace-only title).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The target row is missing or owned by another user.
    #[error("Not found: {entity_type} {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A suggestion generation is already pending for this task.
    #[error("Suggestion generation already pending for task {task_id}")]
    SuggestionInFlight { task_id: String },

    /// Persistent-store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Backend function call failure.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Map a store error for a lookup: `NoResult` means the caller addressed a
/// row that does not exist for them.
pub(crate) fn not_found(entity_type: &'static str, id: &str) -> impl FnOnce(StoreError) -> ManagerError {
    let id = id.to_string();
    move |e| match e {
        StoreError::NoResult => ManagerError::NotFound { entity_type, id },
        other => ManagerError::Store(other),
    }
}
