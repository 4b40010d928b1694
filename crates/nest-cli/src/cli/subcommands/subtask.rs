use clap::Subcommand;

/// Subtask commands, all scoped to one parent task.
#[derive(Clone, Debug, Subcommand)]
pub enum SubtaskCommands {
    /// List a task's subtasks, oldest first.
    List { task_id: String },
    /// Save a subtask (accepting a suggestion removes it from the candidates).
    Add { task_id: String, title: String },
    /// Set a subtask's status: pending, in-progress, done.
    Status {
        task_id: String,
        subtask_id: String,
        status: String,
    },
    /// Delete one subtask.
    Delete {
        task_id: String,
        subtask_id: String,
    },
}
