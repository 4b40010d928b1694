use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task (status starts as pending).
    Add {
        title: String,
        /// Priority: low, medium, high.
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List your tasks, newest first.
    List,
    /// Set a task's status: pending, in-progress, done.
    Status { id: String, status: String },
    /// Set a task's priority: low, medium, high.
    Priority { id: String, priority: String },
    /// Insert a copy of a task (same title/priority, status reset to pending).
    Duplicate { id: String },
    /// Delete a task and, with it, all of its subtasks.
    Delete { id: String },
}
