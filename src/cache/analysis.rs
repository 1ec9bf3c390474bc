//! Expiring analysis cache over a shared key-value store.
//!
//! Expiry is lazy: a read that finds a stale entry evicts it and reports a miss.
//! Storage failures never reach the caller. A failed read is a miss and a
//! failed write is logged, so a fresh computation is always deliverable.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::types::{CacheEntry, CacheLookup, CacheStats};
use crate::constants::{CACHE_KEY_PREFIX, CLICKBAIT_STATS_THRESHOLD};
use crate::scoring::AnalysisResult;
use crate::storage::{KvStore, StorageError, StorageResult};

/// Cache of [`AnalysisResult`]s keyed by item id, namespaced under a key prefix.
pub struct AnalysisCache<K: KvStore> {
    store: Arc<K>,
    clock: Arc<dyn Clock>,
    prefix: String,
}

impl<K: KvStore> AnalysisCache<K> {
    /// Creates a cache on `store` using the system clock and the default prefix.
    pub fn new(store: Arc<K>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a cache with an explicit clock.
    pub fn with_clock(store: Arc<K>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            prefix: CACHE_KEY_PREFIX.to_string(),
        }
    }

    /// Overrides the key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Storage key for `id`.
    #[inline]
    pub fn key(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }

    /// Reads `id`, evicting it if stale or undecodable.
    pub async fn lookup(&self, id: &str) -> CacheLookup {
        let key = self.key(id);

        let value = match self.store.get(&key).await {
            Ok(Some(value)) => value,
            Ok(None) => return CacheLookup::Miss,
            Err(e) => {
                warn!(video_id = %id, error = %e, "Cache read failed, treating as miss");
                return CacheLookup::Unavailable;
            }
        };

        let entry: CacheEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(video_id = %id, error = %e, "Evicting undecodable cache entry");
                self.evict(&key).await;
                return CacheLookup::Corrupt;
            }
        };

        let now = self.clock.now();
        if !entry.is_fresh(now) {
            debug!(
                video_id = %id,
                expires_at = %entry.expires_at,
                "Cache entry expired"
            );
            self.evict(&key).await;
            return CacheLookup::Expired;
        }

        debug!(video_id = %id, "Cache hit");
        CacheLookup::Hit(entry.result)
    }

    /// Returns the cached result if present and fresh.
    pub async fn get(&self, id: &str) -> Option<AnalysisResult> {
        self.lookup(id).await.into_result()
    }

    /// Stores `result` under `id`, expiring `ttl` from now. Overwrites any prior entry.
    ///
    /// A storage failure is logged and swallowed.
    pub async fn put(&self, id: &str, result: &AnalysisResult, ttl: Duration) {
        if let Err(e) = self.try_put(id, result, ttl).await {
            warn!(video_id = %id, error = %e, "Failed to cache analysis");
        }
    }

    /// Like [`put`](Self::put) but reports the storage failure.
    pub async fn try_put(
        &self,
        id: &str,
        result: &AnalysisResult,
        ttl: Duration,
    ) -> StorageResult<()> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            StorageError::WriteFailed(format!("expiry {ttl} from {now} is out of range"))
        })?;
        let entry = CacheEntry::new(result.clone(), expires_at);
        let value = serde_json::to_value(&entry)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.store.set(&self.key(id), value).await?;

        debug!(video_id = %id, expires_at = %expires_at, "Cached analysis");
        Ok(())
    }

    /// Removes the entry for `id`, if any. Never fails.
    pub async fn invalidate(&self, id: &str) {
        self.evict(&self.key(id)).await;
    }

    /// Removes every entry under the prefix and returns how many were removed.
    ///
    /// Keys outside the prefix are left untouched.
    pub async fn clear(&self) -> StorageResult<usize> {
        let keys = self.owned_keys().await?;

        if keys.is_empty() {
            return Ok(0);
        }

        self.store.remove_many(&keys).await?;
        info!(count = keys.len(), "Cache cleared");
        Ok(keys.len())
    }

    /// Counts cached analyses and how many of them look like clickbait.
    ///
    /// Counts every decodable entry under the prefix, expired or not.
    pub async fn stats(&self) -> StorageResult<CacheStats> {
        let all = self.store.get_all().await?;

        let mut stats = CacheStats::default();
        for (key, value) in all {
            if !key.starts_with(&self.prefix) {
                continue;
            }
            stats.analyzed += 1;
            if let Ok(entry) = serde_json::from_value::<CacheEntry>(value)
                && entry.result.score >= CLICKBAIT_STATS_THRESHOLD
            {
                stats.clickbait += 1;
            }
        }

        Ok(stats)
    }

    async fn owned_keys(&self) -> StorageResult<Vec<String>> {
        let all = self.store.get_all().await?;
        let mut keys: Vec<String> = all
            .into_keys()
            .filter(|key| key.starts_with(&self.prefix))
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn evict(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            warn!(key = %key, error = %e, "Failed to remove cache entry");
        }
    }
}

impl<K: KvStore> Clone for AnalysisCache<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            prefix: self.prefix.clone(),
        }
    }
}

impl<K: KvStore> std::fmt::Debug for AnalysisCache<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisCache")
            .field("prefix", &self.prefix)
            .field("clock", &self.clock)
            .finish()
    }
}
