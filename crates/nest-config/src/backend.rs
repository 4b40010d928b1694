//! Backend function endpoint configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the function endpoints
    /// (e.g., `https://myproject.example.co/functions/v1`).
    #[serde(default)]
    pub url: String,

    /// Bearer credential sent with every function call.
    #[serde(default)]
    pub anon_key: String,
}

impl BackendConfig {
    /// Check if the backend config has the fields required for remote calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!BackendConfig::default().is_configured());
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = BackendConfig {
            url: "https://myproject.example.co/functions/v1".into(),
            anon_key: "anon-key".into(),
        };
        assert!(config.is_configured());
    }
}
