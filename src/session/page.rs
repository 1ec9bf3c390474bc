use std::collections::HashSet;

use moka::sync::Cache;
use parking_lot::Mutex;
use tracing::debug;

use crate::analyzer::{AnalyzerResult, ClickbaitAnalyzer};
use crate::constants::DEFAULT_SESSION_CAPACITY;
use crate::item::VideoItem;
use crate::scoring::{AnalysisResult, Scorer};
use crate::storage::KvStore;

/// State for one page view: which items have been wired up and a bounded
/// in-memory memo of results in front of the persistent cache.
///
/// Construct one per page context and call [`reset`](Self::reset) (or
/// [`observe_url`](Self::observe_url)) on navigation.
pub struct PageSession {
    current_url: Mutex<Option<String>>,
    processed: Mutex<HashSet<String>>,
    memo: Cache<String, AnalysisResult>,
}

impl PageSession {
    /// Creates a session with the default memo capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// Creates a session whose memo holds at most `capacity` results.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            current_url: Mutex::new(None),
            processed: Mutex::new(HashSet::new()),
            memo: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Records `video_id` as processed. Returns `false` if it already was.
    pub fn mark_processed(&self, video_id: &str) -> bool {
        self.processed.lock().insert(video_id.to_string())
    }

    pub fn is_processed(&self, video_id: &str) -> bool {
        self.processed.lock().contains(video_id)
    }

    pub fn processed_count(&self) -> usize {
        self.processed.lock().len()
    }

    /// Filters `items` down to those not yet processed and marks them.
    pub fn take_unprocessed(&self, items: Vec<VideoItem>) -> Vec<VideoItem> {
        let mut processed = self.processed.lock();
        items
            .into_iter()
            .filter(|item| processed.insert(item.video_id.clone()))
            .collect()
    }

    /// Returns a result memoised in this session.
    pub fn memoized(&self, video_id: &str) -> Option<AnalysisResult> {
        self.memo.get(video_id)
    }

    /// Serves from the session memo, else asks `analyzer` and memoises successes.
    pub async fn analyze<S: Scorer, K: KvStore>(
        &self,
        analyzer: &ClickbaitAnalyzer<S, K>,
        item: &VideoItem,
    ) -> AnalyzerResult<AnalysisResult> {
        if let Some(result) = self.memo.get(&item.video_id) {
            return Ok(result);
        }

        let result = analyzer.analyze(item).await?;
        self.memo.insert(item.video_id.clone(), result.clone());
        Ok(result)
    }

    /// Tracks the page URL; a change clears session state. Returns `true` on navigation.
    pub fn observe_url(&self, url: &str) -> bool {
        let mut current = self.current_url.lock();
        if current.as_deref() == Some(url) {
            return false;
        }

        let navigated = current.is_some();
        *current = Some(url.to_string());
        drop(current);

        if navigated {
            debug!(url = %url, "URL changed, resetting page session");
            self.reset();
        }
        navigated
    }

    /// Forgets processed items and memoised results.
    pub fn reset(&self) {
        self.processed.lock().clear();
        self.memo.invalidate_all();
    }

    /// Number of memoised results (after pending maintenance).
    pub fn memo_len(&self) -> u64 {
        self.memo.run_pending_tasks();
        self.memo.entry_count()
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSession")
            .field("processed", &self.processed_count())
            .field("memo", &self.memo.entry_count())
            .finish()
    }
}
