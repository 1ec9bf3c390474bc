use thiserror::Error;

/// Failures a [`Scorer`](super::Scorer) may report.
///
/// The heuristic scorer is total and never produces these; they exist for
/// classifiers backed by a remote service or a model that can fail to load.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("scoring computation failed: {reason}")]
    ComputationFailed { reason: String },

    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },
}
