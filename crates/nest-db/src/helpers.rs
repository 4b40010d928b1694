//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual
//! datetime format issue (`SQLite`'s `datetime('now')` vs Rust's
//! `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::StoreError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-08-06T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-08-06 14:30:00"`).
///
/// # Errors
///
/// Returns `StoreError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the nest-core enums that use `#[serde(rename_all = "kebab-case")]`.
///
/// # Errors
///
/// Returns `StoreError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| StoreError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `StoreError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, StoreError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nest_core::enums::{Priority, TaskStatus};

    #[test]
    fn parse_rfc3339_datetime() {
        let dt = parse_datetime("2026-08-06T14:30:00+00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-08-06T14:30:00+00:00");
    }

    #[test]
    fn parse_sqlite_datetime() {
        let dt = parse_datetime("2026-08-06 14:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-08-06T14:30:00+00:00");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parse_enum_kebab_case() {
        let status: TaskStatus = parse_enum("in-progress").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        let priority: Priority = parse_enum("high").unwrap();
        assert_eq!(priority, Priority::High);
    }

    #[test]
    fn parse_enum_rejects_unknown() {
        let result: Result<TaskStatus, _> = parse_enum("archived");
        assert!(result.is_err());
    }
}
