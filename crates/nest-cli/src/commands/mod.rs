//! Command handlers for the `nst` binary.

pub mod auth;
pub mod profile;
pub mod search;
pub mod shared;
pub mod subtask;
pub mod suggest;
pub mod task;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, flags),
        Commands::Task { action } => task::handle(&action, ctx, flags).await,
        Commands::Subtask { action } => subtask::handle(&action, ctx, flags).await,
        Commands::Suggest { task_id } => suggest::handle(&task_id, ctx, flags).await,
        Commands::Search { query } => search::handle(&query, ctx, flags).await,
        Commands::Profile { action } => profile::handle(&action, ctx, flags).await,
    }
}
