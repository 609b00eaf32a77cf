//! # eco-config
//!
//! Layered configuration loading for Ecotrack tooling using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ECO_*` prefix, `__` as separator)
//! 2. Project-level `.ecotrack/config.toml`
//! 3. User-level `~/.config/ecotrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ECO_SCHEMA__EXPORT_DIR` -> `schema.export_dir`,
//! `ECO_VALIDATION__ENFORCE_INVARIANTS` -> `validation.enforce_invariants`.
//!
//! # Usage
//!
//! ```no_run
//! use eco_config::EcoConfig;
//!
//! let config = EcoConfig::load_with_dotenv().expect("config");
//! println!("exporting to {}", config.schema.export_dir);
//! ```

mod error;
mod schema;
mod validation;

pub use error::ConfigError;
pub use schema::SchemaConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
const LOCAL_CONFIG_PATH: &str = ".ecotrack/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EcoConfig {
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl EcoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed or
    /// extracted, and `ConfigError::InvalidValue` when a value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "failed to load .env"),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ECO_").split("__"))
    }

    /// Reject values that deserialize but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `schema.export_dir`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema.export_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "schema.export_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ecotrack").join("config.toml"))
    }
}
