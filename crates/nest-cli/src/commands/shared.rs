//! Shared helpers for command handlers.

use chrono::{DateTime, Utc};

use nest_core::enums::{Priority, TaskStatus};

/// Parse a priority argument: low, medium, high.
///
/// # Errors
///
/// Returns an error naming the accepted values.
pub fn parse_priority(s: &str) -> anyhow::Result<Priority> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| anyhow::anyhow!("invalid priority '{s}' (expected low, medium, or high)"))
}

/// Parse a status argument: pending, in-progress, done.
///
/// # Errors
///
/// Returns an error naming the accepted values.
pub fn parse_status(s: &str) -> anyhow::Result<TaskStatus> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| anyhow::anyhow!("invalid status '{s}' (expected pending, in-progress, or done)"))
}

/// Timestamp column format for tables.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_priorities() {
        assert_eq!(parse_priority("low").unwrap(), Priority::Low);
        assert_eq!(parse_priority("MEDIUM").unwrap(), Priority::Medium);
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert!(parse_priority("urgent").is_err());
    }

    #[test]
    fn parses_all_statuses() {
        assert_eq!(parse_status("pending").unwrap(), TaskStatus::Pending);
        assert_eq!(parse_status("in-progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(parse_status("Done").unwrap(), TaskStatus::Done);
        assert!(parse_status("blocked").is_err());
    }
}
