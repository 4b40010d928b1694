//! Cross-cutting error types for Tasknest.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `StoreError`, `RemoteError`) are defined in
//! their respective crates; everything converges to `anyhow` in `nest-cli`.

use thiserror::Error;

/// Errors that can be raised by any Tasknest crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No active session at the auth boundary. Fatal to the operation; the
    /// user must sign in again. Never retried.
    #[error("Not authenticated: no active session")]
    NotAuthenticated,

    /// Entity lookup returned no result, or the row is owned by another user.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (empty title, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
