//! # nest-config
//!
//! Layered configuration loading for Tasknest using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEST_*` prefix, `__` as separator)
//! 2. Project-level `.tasknest/config.toml`
//! 3. User-level `~/.config/tasknest/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEST_BACKEND__URL` -> `backend.url`,
//! `NEST_DATABASE__PATH` -> `database.path`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use nest_config::NestConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = NestConfig::load_with_dotenv().expect("config");
//!
//! if config.backend.is_configured() {
//!     println!("Backend URL: {}", config.backend.url);
//! }
//! ```

mod backend;
mod database;
mod error;

pub use backend::BackendConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NestConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl NestConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tasknest/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NEST_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tasknest").join("config.toml"))
    }

    /// Fail unless the backend section is usable for remote calls.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when URL or key is missing.
    pub fn require_backend(&self) -> Result<&BackendConfig, ConfigError> {
        if self.backend.is_configured() {
            Ok(&self.backend)
        } else {
            Err(ConfigError::NotConfigured {
                section: "backend".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = NestConfig::default();
        assert!(!config.backend.is_configured());
        assert_eq!(config.database.path, "tasknest.db");
    }

    #[test]
    fn env_layer_wins() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NEST_BACKEND__URL", "https://env.example/functions/v1");
            jail.set_env("NEST_BACKEND__ANON_KEY", "env-key");
            jail.set_env("NEST_DATABASE__PATH", "/tmp/env.db");

            let config: NestConfig = NestConfig::figment().extract()?;
            assert_eq!(config.backend.url, "https://env.example/functions/v1");
            assert_eq!(config.backend.anon_key, "env-key");
            assert_eq!(config.database.path, "/tmp/env.db");
            Ok(())
        });
    }

    #[test]
    fn project_toml_layer() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".tasknest")?;
            jail.create_file(
                ".tasknest/config.toml",
                r#"
                [backend]
                url = "https://toml.example/functions/v1"
                anon_key = "toml-key"
                "#,
            )?;

            let config: NestConfig = NestConfig::figment().extract()?;
            assert_eq!(config.backend.url, "https://toml.example/functions/v1");
            Ok(())
        });
    }

    #[test]
    fn require_backend_on_default_fails() {
        let config = NestConfig::default();
        let err = config.require_backend().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { .. }));
    }
}
