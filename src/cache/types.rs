use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::AnalysisResult;

/// Persisted cache record. Owned by [`AnalysisCache`](super::AnalysisCache).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub result: AnalysisResult,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(result: AnalysisResult, expires_at: DateTime<Utc>) -> Self {
        Self { result, expires_at }
    }

    /// An entry is fresh strictly before its expiry instant.
    #[inline]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Outcome of a cache read, including why a read missed.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(AnalysisResult),
    /// No entry for the id.
    Miss,
    /// Entry existed but had expired; it has been evicted.
    Expired,
    /// Entry could not be decoded; it has been evicted.
    Corrupt,
    /// Storage failed; treated as a miss.
    Unavailable,
}

impl CacheLookup {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheLookup::Hit(_) => "HIT",
            CacheLookup::Miss => "MISS",
            CacheLookup::Expired => "EXPIRED",
            CacheLookup::Corrupt => "CORRUPT",
            CacheLookup::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            CacheLookup::Hit(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for CacheLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counts shown by the settings popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Cached analyses under the cache prefix.
    pub analyzed: usize,
    /// Of those, how many scored at or above the clickbait stats threshold.
    pub clickbait: usize,
}
