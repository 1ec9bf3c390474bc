use std::sync::Arc;

use tracing::{debug, warn};

use super::error::AnalyzerResult;
use crate::cache::{AnalysisCache, CacheStats, Clock, SystemClock};
use crate::item::VideoItem;
use crate::scoring::{AnalysisResult, Scorer};
use crate::settings::{Settings, SettingsPatch, SettingsStore};
use crate::storage::KvStore;

/// Read-through analysis: cache first, score on miss, cache the result.
pub struct ClickbaitAnalyzer<S: Scorer, K: KvStore> {
    scorer: S,
    cache: AnalysisCache<K>,
    settings: SettingsStore<K>,
    clock: Arc<dyn Clock>,
}

impl<S: Scorer, K: KvStore> ClickbaitAnalyzer<S, K> {
    /// Creates an analyzer whose cache and settings share `store`.
    pub fn new(scorer: S, store: Arc<K>) -> Self {
        Self::with_clock(scorer, store, Arc::new(SystemClock))
    }

    /// Creates an analyzer with an explicit clock for timestamps and expiry.
    pub fn with_clock(scorer: S, store: Arc<K>, clock: Arc<dyn Clock>) -> Self {
        Self {
            scorer,
            cache: AnalysisCache::with_clock(Arc::clone(&store), Arc::clone(&clock)),
            settings: SettingsStore::new(store),
            clock,
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn cache(&self) -> &AnalysisCache<K> {
        &self.cache
    }

    pub fn settings_store(&self) -> &SettingsStore<K> {
        &self.settings
    }

    /// Analyses `item`, serving a fresh cached result when one exists.
    ///
    /// Scorer failures are returned and never cached. Cache write failures are
    /// logged by the cache and do not affect the returned result.
    pub async fn analyze(&self, item: &VideoItem) -> AnalyzerResult<AnalysisResult> {
        debug!(video_id = %item.video_id, "Analyzing video");

        if let Some(cached) = self.cache.get(&item.video_id).await {
            debug!(video_id = %item.video_id, "Using cached analysis");
            return Ok(cached);
        }

        let card = match self.scorer.score(&item.title).await {
            Ok(card) => card,
            Err(e) => {
                warn!(
                    video_id = %item.video_id,
                    scorer = self.scorer.name(),
                    error = %e,
                    "Analysis failed"
                );
                return Err(e.into());
            }
        };

        let result = card.into_result(item.video_id.clone(), self.clock.now());

        let settings = self.settings.get_settings().await;
        self.cache
            .put(&item.video_id, &result, settings.ttl())
            .await;

        debug!(
            video_id = %item.video_id,
            scorer = self.scorer.name(),
            score = result.score,
            "Analysis complete"
        );
        Ok(result)
    }

    /// Current settings (defaults on storage failure).
    pub async fn settings(&self) -> Settings {
        self.settings.get_settings().await
    }

    pub async fn update_settings(&self, patch: &SettingsPatch) -> AnalyzerResult<Settings> {
        Ok(self.settings.update_settings(patch).await?)
    }

    /// Removes all cached analyses, returning how many were removed.
    pub async fn clear_cache(&self) -> AnalyzerResult<usize> {
        Ok(self.cache.clear().await?)
    }

    pub async fn stats(&self) -> AnalyzerResult<CacheStats> {
        Ok(self.cache.stats().await?)
    }
}

impl<S: Scorer, K: KvStore> std::fmt::Debug for ClickbaitAnalyzer<S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickbaitAnalyzer")
            .field("scorer", &self.scorer.name())
            .field("cache", &self.cache)
            .finish()
    }
}
