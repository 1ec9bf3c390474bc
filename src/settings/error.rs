use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid threshold {value}: must be between 0 and 100")]
    InvalidThreshold { value: u16 },

    #[error("invalid cache expiry {value} hours: must be positive and at most ten years")]
    InvalidCacheExpiry { value: f64 },

    #[error("settings storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
