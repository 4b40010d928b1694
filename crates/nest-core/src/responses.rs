//! CLI response types returned as JSON by `nst` commands.
//!
//! These structs define the shape of `--json` output for commands like
//! `nst task add`, `nst task list`, `nst suggest`, and `nst search`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Subtask, Task};
use crate::enums::{Priority, TaskStatus};

/// Response from `nst task add` and `nst task duplicate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskCreateResponse {
    pub task: Task,
}

/// Response from `nst task list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// Response from `nst subtask list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubtaskListResponse {
    pub task_id: String,
    pub subtasks: Vec<Subtask>,
}

/// Response from `nst suggest`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionsResponse {
    pub task_id: String,
    /// Candidate subtask titles, in generator order.
    pub suggestions: Vec<String>,
}

/// A single smart-search hit: a task annotated with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Cosine similarity against the query embedding, in `[0, 1]`.
    pub similarity: f64,
}

/// Response from `nst search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResultsResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
}
