use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced at the auth boundary (the CLI session store), consumed by
/// `nest-manager`, which takes it as an explicit parameter on every operation
/// instead of reading ambient session state. Contains only data fields — no
/// auth logic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserIdentity {
    /// Opaque backend user ID.
    pub user_id: String,
    /// Email shown in profile views. `None` when the backend did not supply one.
    pub email: Option<String>,
}

impl UserIdentity {
    /// Build an identity from a bare user ID (no email on record).
    #[must_use]
    pub const fn new(user_id: String) -> Self {
        Self {
            user_id,
            email: None,
        }
    }
}
