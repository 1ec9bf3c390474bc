//! Baitsense library crate (used by the CLI binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`HeuristicScorer`], [`Scorer`] - Title scoring
//! - [`ScoreCard`], [`AnalysisResult`], [`VerdictTier`] - Scores and verdicts
//!
//! ## Caching & Storage
//! - [`AnalysisCache`], [`CacheEntry`], [`CacheStats`] - Expiring per-video cache
//! - [`KvStore`], [`MemoryStore`], [`FileStore`] - Key-value backends
//! - [`Settings`], [`SettingsStore`] - Persisted user preferences
//!
//! ## Orchestration
//! - [`ClickbaitAnalyzer`] - Cache-first analysis
//! - [`MessageHandler`], [`Request`], [`Response`] - Message dispatch
//! - [`PageSession`], [`Debouncer`] - Per-page bookkeeping and hover debounce
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod item;
pub mod messages;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod storage;

pub use analyzer::{AnalyzerError, AnalyzerResult, ClickbaitAnalyzer};
#[cfg(any(test, feature = "mock"))]
pub use cache::ManualClock;
pub use cache::{AnalysisCache, CacheEntry, CacheLookup, CacheStats, Clock, SystemClock};
pub use config::{Config, ConfigError};
pub use hashing::{hash_title, hash_title_bytes};
pub use item::{VideoItem, extract_video_id};
pub use messages::{AnalysisPayload, MessageHandler, Request, Response};
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockScorer;
pub use scoring::{
    AnalysisResult, HeuristicScorer, ScoreCard, Scorer, ScoringError, VerdictTier,
    generate_verdict,
};
pub use session::{Debounce, Debouncer, PageSession};
pub use settings::{Settings, SettingsError, SettingsPatch, SettingsStore};
#[cfg(any(test, feature = "mock"))]
pub use storage::FlakyStore;
pub use storage::{FileStore, KvStore, MemoryStore, StorageError, StorageResult};
