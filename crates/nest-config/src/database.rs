//! Local database configuration.

use serde::{Deserialize, Serialize};

/// Default database file name, relative to the data directory.
fn default_path() -> String {
    "tasknest.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `":memory:"` keeps everything
    /// transient (tests).
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_set() {
        assert_eq!(DatabaseConfig::default().path, "tasknest.db");
    }
}
