//! Command output rendering: JSON or a plain aligned table.

pub mod table;

use serde::Serialize;

/// Print a response struct as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
