//! File-backed session store — the thin auth boundary.
//!
//! The backend owns authentication; the CLI only records which identity the
//! current session belongs to. Resolution order: `NEST_SESSION__USER_ID`
//! environment variable, then `~/.config/tasknest/session.json`. Absence of
//! both is fatal to every non-auth command; there are no anonymous
//! operations and no retry.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use nest_core::errors::CoreError;
use nest_core::identity::UserIdentity;

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user_id: String,
    email: Option<String>,
}

fn session_path() -> anyhow::Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("no config directory available")?
        .join("tasknest");
    Ok(dir.join(SESSION_FILE_NAME))
}

/// Record the active session identity.
pub fn store(user_id: &str, email: Option<&str>) -> anyhow::Result<()> {
    let path = session_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let session = StoredSession {
        user_id: user_id.to_string(),
        email: email.map(String::from),
    };
    let json = serde_json::to_string_pretty(&session)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Forget the active session. Missing file is fine.
pub fn delete() -> anyhow::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("failed to delete {}", path.display()))?;
    }
    Ok(())
}

/// Load the active session identity, if any.
///
/// Priority: `NEST_SESSION__USER_ID` env (with optional
/// `NEST_SESSION__EMAIL`) → session file.
#[must_use]
pub fn load() -> Option<UserIdentity> {
    if let Ok(user_id) = std::env::var("NEST_SESSION__USER_ID") {
        if !user_id.is_empty() {
            return Some(UserIdentity {
                user_id,
                email: std::env::var("NEST_SESSION__EMAIL").ok().filter(|e| !e.is_empty()),
            });
        }
    }

    let path = session_path().ok()?;
    let contents = fs::read_to_string(path).ok()?;
    let session: StoredSession = serde_json::from_str(&contents).ok()?;
    Some(UserIdentity {
        user_id: session.user_id,
        email: session.email,
    })
}

/// Resolve the current identity or fail the operation.
///
/// # Errors
///
/// Returns [`CoreError::NotAuthenticated`] when no session is active.
pub fn current() -> Result<UserIdentity, CoreError> {
    load().ok_or(CoreError::NotAuthenticated)
}
