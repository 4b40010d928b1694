//! Priority and status enums for Tasknest entities.
//!
//! All enums use the backend's wire strings via
//! `#[serde(rename_all = "kebab-case")]`, so `InProgress` serializes as
//! `"in-progress"`. Transitions are deliberately unrestricted: a task can move
//! between any two states in either direction, and `done` can be reopened. The
//! only fixed point is that newly created tasks and subtasks always start as
//! [`TaskStatus::Pending`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Every priority, in ascending order of urgency.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Return the string representation used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task or subtask.
///
/// ```text
/// pending ⇄ in-progress ⇄ done   (any state reachable from any other)
/// ```
///
/// New rows always start as `Pending`. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Every status, in nominal workflow order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Return the string representation used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(priority_low, Priority, Priority::Low, "low");
    test_serde_roundtrip!(priority_medium, Priority, Priority::Medium, "medium");
    test_serde_roundtrip!(priority_high, Priority, Priority::High, "high");

    test_serde_roundtrip!(status_pending, TaskStatus, TaskStatus::Pending, "pending");
    test_serde_roundtrip!(
        status_in_progress,
        TaskStatus,
        TaskStatus::InProgress,
        "in-progress"
    );
    test_serde_roundtrip!(status_done, TaskStatus, TaskStatus::Done, "done");

    #[test]
    fn status_rejects_unknown_string() {
        let result: Result<TaskStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn priority_rejects_unknown_string() {
        let result: Result<Priority, _> = serde_json::from_str("\"urgent\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Priority::High), "high");
        assert_eq!(format!("{}", TaskStatus::InProgress), "in-progress");
        assert_eq!(format!("{}", TaskStatus::Done), "done");
    }

    #[test]
    fn all_covers_every_wire_string() {
        let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(priorities, vec!["low", "medium", "high"]);

        let statuses: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(statuses, vec!["pending", "in-progress", "done"]);
    }
}
