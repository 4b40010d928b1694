//! # nest-manager
//!
//! The task/subtask lifecycle manager.
//!
//! [`TaskManager`] owns the in-memory mirror of one user's tasks, subtasks,
//! and transient suggestion sets, and orchestrates every mutation against the
//! persistent store. The protocol for each mutation is:
//!
//! 1. Execute the store operation.
//! 2. On success, re-fetch the affected collection in full (the store is the
//!    sole source of truth — the mirror is never patched in place).
//! 3. On any error, leave the mirror untouched and surface the error once.
//!
//! The authenticated user identity is an explicit parameter on every
//! operation; the manager holds no ambient session state. Concurrency is
//! single-threaded and cooperative: methods take `&mut self`, and there is no
//! guaranteed ordering between independently triggered mutations beyond
//! whichever store write lands first.

mod error;
mod manager;

pub use error::ManagerError;
pub use manager::TaskManager;
