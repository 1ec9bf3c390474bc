//! Title scoring: the [`Scorer`] seam, the heuristic implementation, and verdict tiers.
//!
//! A scorer maps a title to a [`ScoreCard`]; the caller binds it to an item id
//! and timestamp with [`ScoreCard::into_result`]. The heuristic is pure and
//! re-entrant, so one instance can be shared freely across tasks.

pub mod error;
pub mod heuristic;
pub mod scorer;
pub mod types;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use heuristic::{
    CLICKBAIT_KEYWORDS, HeuristicScorer, REASON_CAPS, REASON_GENUINE, REASON_PUNCTUATION,
    VAGUE_WORDS, calculate_score, caps_ratio, identify_reasons, punctuation_runs,
};
#[cfg(any(test, feature = "mock"))]
pub use scorer::MockScorer;
pub use scorer::Scorer;
pub use types::{AnalysisResult, ScoreCard};
pub use verdict::{VerdictTier, generate_verdict};
