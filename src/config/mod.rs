//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `BAITSENSE_*` environment variables.
//! User preferences (threshold, cache lifetime) are not configured here; they
//! live in the key-value store, see [`crate::settings`].

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_SESSION_CAPACITY, DEFAULT_STORAGE_PATH};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `BAITSENSE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file backing the key-value store. Default: `./.data/baitsense.json`.
    pub storage_path: PathBuf,

    /// Max memoised results per page session. Default: `1_000`.
    pub session_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            session_capacity: DEFAULT_SESSION_CAPACITY,
        }
    }
}

impl Config {
    const ENV_STORAGE_PATH: &'static str = "BAITSENSE_STORAGE_PATH";
    const ENV_SESSION_CAPACITY: &'static str = "BAITSENSE_SESSION_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_path = Self::parse_path_from_env(Self::ENV_STORAGE_PATH, defaults.storage_path);
        let session_capacity =
            Self::parse_u64_from_env(Self::ENV_SESSION_CAPACITY, defaults.session_capacity)?;

        Ok(Self {
            storage_path,
            session_capacity,
        })
    }

    /// Validates ranges and the storage path (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_capacity == 0 {
            return Err(ConfigError::InvalidSessionCapacity {
                value: self.session_capacity,
            });
        }

        if self.storage_path.exists() && !self.storage_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.storage_path.clone(),
            });
        }

        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
