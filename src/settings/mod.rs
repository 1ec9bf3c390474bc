//! User-facing settings (enable toggle, warning threshold, cache lifetime).
//!
//! Settings live in the shared key-value store under a single key. A partially
//! populated stored object is merged over the defaults on read.

pub mod error;
pub mod store;


pub use error::{SettingsError, SettingsResult};
pub use store::SettingsStore;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_EXPIRY_HOURS, DEFAULT_ENABLED, DEFAULT_THRESHOLD, MAX_CACHE_EXPIRY_HOURS,
    MAX_SCORE,
};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether items are analysed at all. Default: `true`.
    pub enabled: bool,

    /// Minimum score that triggers a warning. Default: `60`.
    pub threshold: u8,

    /// Lifetime of newly cached analyses, in hours. Default: `24`.
    pub cache_expiry_hours: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            threshold: DEFAULT_THRESHOLD,
            cache_expiry_hours: DEFAULT_CACHE_EXPIRY_HOURS,
        }
    }
}

impl Settings {
    /// Checks value ranges.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.threshold > MAX_SCORE {
            return Err(SettingsError::InvalidThreshold {
                value: self.threshold.into(),
            });
        }
        if !self.cache_expiry_hours.is_finite()
            || self.cache_expiry_hours <= 0.0
            || self.cache_expiry_hours > MAX_CACHE_EXPIRY_HOURS
        {
            return Err(SettingsError::InvalidCacheExpiry {
                value: self.cache_expiry_hours,
            });
        }
        Ok(())
    }

    /// Cache lifetime as a duration, truncated to whole milliseconds.
    pub fn ttl(&self) -> Duration {
        ttl_from_hours(self.cache_expiry_hours)
    }

    /// Returns `true` if the overlay should warn about `score`.
    #[inline]
    pub fn should_flag(&self, score: u8) -> bool {
        self.enabled && score >= self.threshold
    }

    /// Returns a copy with every field present in `patch` replaced.
    ///
    /// Fails if the patched threshold does not fit a score.
    pub fn merged(&self, patch: &SettingsPatch) -> SettingsResult<Self> {
        let threshold = match patch.threshold {
            Some(value) => u8::try_from(value)
                .ok()
                .filter(|t| *t <= MAX_SCORE)
                .ok_or(SettingsError::InvalidThreshold { value })?,
            None => self.threshold,
        };

        Ok(Self {
            enabled: patch.enabled.unwrap_or(self.enabled),
            threshold,
            cache_expiry_hours: patch.cache_expiry_hours.unwrap_or(self.cache_expiry_hours),
        })
    }
}

/// Converts an hour count to a duration; non-finite or negative input yields zero.
pub fn ttl_from_hours(hours: f64) -> Duration {
    if !hours.is_finite() || hours <= 0.0 {
        return Duration::zero();
    }
    let millis = (hours * MILLIS_PER_HOUR).min(i64::MAX as f64) as i64;
    Duration::try_milliseconds(millis).unwrap_or(Duration::MAX)
}

/// Partial settings update; absent fields are left unchanged.
///
/// `threshold` is wider than a score so out-of-range input from the popup
/// reaches validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_expiry_hours: Option<f64>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.threshold.is_none() && self.cache_expiry_hours.is_none()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn cache_expiry_hours(mut self, hours: f64) -> Self {
        self.cache_expiry_hours = Some(hours);
        self
    }
}
