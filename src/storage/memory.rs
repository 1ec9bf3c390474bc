use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::error::StorageResult;
use super::kv::KvStore;

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns `true` if `key` is present (without going through the async API).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the sorted list of stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn get_many(&self, keys: &[String]) -> StorageResult<HashMap<String, Value>> {
        let entries = self.entries.read();
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(key).map(|v| (key.clone(), v.clone())))
            .collect())
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    async fn remove_many(&self, keys: &[String]) -> StorageResult<()> {
        let mut entries = self.entries.write();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn get_all(&self) -> StorageResult<HashMap<String, Value>> {
        Ok(self.entries.read().clone())
    }
}
