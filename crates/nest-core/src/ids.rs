//! ID prefix constants.
//!
//! Row IDs are `"<prefix>-<8 hex chars>"`, generated by the store via
//! `randomblob(4)`. Profiles are keyed by the backend user ID and carry no
//! generated prefix.

/// Prefix for task IDs (`tsk-a3f8b2c1`).
pub const PREFIX_TASK: &str = "tsk";

/// Prefix for subtask IDs (`sub-a3f8b2c1`).
pub const PREFIX_SUBTASK: &str = "sub";

/// All generated-ID prefixes, for exhaustive tests.
pub const ALL_PREFIXES: [&str; 2] = [PREFIX_TASK, PREFIX_SUBTASK];
