//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Session memo capacity must be positive.
    #[error("invalid session capacity {value}: must be greater than 0")]
    InvalidSessionCapacity { value: u64 },

    /// Storage path exists but is not a file.
    #[error("storage path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
