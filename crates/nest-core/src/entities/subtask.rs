use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// A child work item scoped to exactly one parent task.
///
/// Subtasks cannot outlive their parent: the `task_id` foreign key carries
/// `ON DELETE CASCADE`, so deleting a task removes its subtasks at the store
/// level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subtask {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}
