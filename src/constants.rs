//! Cross-cutting, shared constants.
//!
//! Score weights live here so the heuristic, the verdict tiers, and the cache
//! statistics agree on one set of numbers.

/// Storage key prefix for cached analyses. `clear()` only touches keys under it.
pub const CACHE_KEY_PREFIX: &str = "cache_";

/// Storage key for the user settings object.
pub const SETTINGS_KEY: &str = "settings";

pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_THRESHOLD: u8 = 60;
pub const DEFAULT_CACHE_EXPIRY_HOURS: f64 = 24.0;

/// Upper bound on `cacheExpiryHours`: ten years.
pub const MAX_CACHE_EXPIRY_HOURS: f64 = 24.0 * 365.0 * 10.0;

/// Score at or above which a cached analysis counts as "clickbait detected".
pub const CLICKBAIT_STATS_THRESHOLD: u8 = 60;

pub const MAX_SCORE: u8 = 100;

/// Fixed confidence reported by the heuristic scorer.
///
/// Placeholder until a calibrated model exists; never used for thresholding.
pub const HEURISTIC_CONFIDENCE: f32 = 0.85;

pub const CAPS_RATIO_LIMIT: f64 = 0.5;
pub const CAPS_POINTS: u32 = 30;
pub const KEYWORD_POINTS: u32 = 15;
pub const PUNCTUATION_RUN_POINTS: u32 = 10;
pub const VAGUE_WORD_POINTS: u32 = 5;

pub const HIGHLY_LIKELY_MIN_SCORE: u8 = 80;
pub const LIKELY_MIN_SCORE: u8 = 60;
pub const MODERATE_MIN_SCORE: u8 = 40;
pub const MINOR_MIN_SCORE: u8 = 20;

pub const DEFAULT_HOVER_DELAY_MS: u64 = 500;
pub const DEFAULT_SESSION_CAPACITY: u64 = 1_000;
pub const DEFAULT_STORAGE_PATH: &str = "./.data/baitsense.json";
