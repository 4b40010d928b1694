use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ProfileCommands, SubtaskCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session management (login, logout, whoami).
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Subtasks of one task.
    Subtask {
        #[command(subcommand)]
        action: SubtaskCommands,
    },
    /// Generate AI subtask suggestions for a task.
    Suggest {
        /// Parent task ID.
        task_id: String,
    },
    /// Semantic search over task titles.
    Search {
        /// Free-text query. Blank input returns nothing without a backend call.
        query: String,
    },
    /// Profile record.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}
