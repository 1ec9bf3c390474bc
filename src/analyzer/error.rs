use thiserror::Error;

use crate::scoring::ScoringError;
use crate::settings::SettingsError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The scorer could not analyse the title. Distinct from a genuine verdict.
    #[error("analysis failed: {0}")]
    Computation(#[from] ScoringError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AnalyzerError {
    /// Returns `true` if the failure came from the scorer.
    pub fn is_computation(&self) -> bool {
        matches!(self, AnalyzerError::Computation(_))
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
