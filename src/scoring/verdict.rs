use crate::constants::{
    HIGHLY_LIKELY_MIN_SCORE, LIKELY_MIN_SCORE, MINOR_MIN_SCORE, MODERATE_MIN_SCORE,
};

/// Severity tier derived from a score, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerdictTier {
    Genuine,
    Minor,
    Moderate,
    Likely,
    HighlyLikely,
}

impl VerdictTier {
    /// Maps a score to its tier using the fixed 80/60/40/20 thresholds.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGHLY_LIKELY_MIN_SCORE {
            VerdictTier::HighlyLikely
        } else if score >= LIKELY_MIN_SCORE {
            VerdictTier::Likely
        } else if score >= MODERATE_MIN_SCORE {
            VerdictTier::Moderate
        } else if score >= MINOR_MIN_SCORE {
            VerdictTier::Minor
        } else {
            VerdictTier::Genuine
        }
    }

    /// Returns `true` if the verdict message lists the reasons.
    #[inline]
    pub fn includes_reasons(&self) -> bool {
        matches!(
            self,
            VerdictTier::HighlyLikely | VerdictTier::Likely | VerdictTier::Moderate
        )
    }

    /// Overlay colour band for this tier.
    pub fn severity_class(&self) -> &'static str {
        match self {
            VerdictTier::HighlyLikely => "high",
            VerdictTier::Likely => "medium-high",
            VerdictTier::Moderate => "medium",
            VerdictTier::Minor => "low",
            VerdictTier::Genuine => "very-low",
        }
    }

    /// Builds the verdict message; reasons are joined with `", "` for the upper three tiers.
    pub fn message(&self, reasons: &[String]) -> String {
        let joined = reasons.join(", ");
        match self {
            VerdictTier::HighlyLikely => {
                format!("Highly likely clickbait. Proceed with caution. ({})", joined)
            }
            VerdictTier::Likely => {
                format!("Likely clickbait. Title may be misleading. ({})", joined)
            }
            VerdictTier::Moderate => {
                format!("Moderate clickbait indicators detected. ({})", joined)
            }
            VerdictTier::Minor => "Minor clickbait elements present.".to_string(),
            VerdictTier::Genuine => "Appears to be genuine content.".to_string(),
        }
    }
}

impl std::fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VerdictTier::HighlyLikely => "HIGHLY_LIKELY",
            VerdictTier::Likely => "LIKELY",
            VerdictTier::Moderate => "MODERATE",
            VerdictTier::Minor => "MINOR",
            VerdictTier::Genuine => "GENUINE",
        };
        write!(f, "{}", label)
    }
}

/// Verdict text for `(score, reasons)`.
pub fn generate_verdict(score: u8, reasons: &[String]) -> String {
    VerdictTier::from_score(score).message(reasons)
}
