use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::verdict::VerdictTier;

/// Output of a [`Scorer`](super::Scorer) before it is bound to an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    /// Clickbait score in `0..=100`.
    pub score: u8,
    /// Human-readable verdict for the score's tier.
    pub verdict: String,
    /// Matched reasons, never empty.
    pub reasons: Vec<String>,
    /// Informational confidence in `0.0..=1.0`.
    pub confidence: f32,
}

impl ScoreCard {
    /// Returns the verdict tier for this card's score.
    pub fn tier(&self) -> VerdictTier {
        VerdictTier::from_score(self.score)
    }

    /// Stamps the card with an item id and computation time.
    pub fn into_result(self, id: impl Into<String>, computed_at: DateTime<Utc>) -> AnalysisResult {
        AnalysisResult {
            id: id.into(),
            score: self.score,
            verdict: self.verdict,
            reasons: self.reasons,
            confidence: self.confidence,
            computed_at,
        }
    }
}

/// A scored item, as cached and handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Item identifier (video id).
    pub id: String,
    pub score: u8,
    pub verdict: String,
    pub reasons: Vec<String>,
    pub confidence: f32,
    pub computed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Returns the verdict tier for this result's score.
    pub fn tier(&self) -> VerdictTier {
        VerdictTier::from_score(self.score)
    }

    /// Returns `true` if the score is at or above `threshold`.
    #[inline]
    pub fn exceeds_threshold(&self, threshold: u8) -> bool {
        self.score >= threshold
    }
}
