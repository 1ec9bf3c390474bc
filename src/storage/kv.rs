use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use super::error::StorageResult;

/// Asynchronous key-value store shared by the cache and the settings store.
///
/// Values are opaque JSON blobs. No operation is assumed atomic across keys,
/// and a read-modify-write of a single key is not atomic either.
pub trait KvStore: Send + Sync {
    /// Reads one key.
    fn get(&self, key: &str) -> impl Future<Output = StorageResult<Option<Value>>> + Send;

    /// Reads several keys; missing keys are absent from the returned map.
    fn get_many(
        &self,
        keys: &[String],
    ) -> impl Future<Output = StorageResult<HashMap<String, Value>>> + Send;

    /// Writes one key, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> impl Future<Output = StorageResult<()>> + Send;

    /// Removes one key. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = StorageResult<()>> + Send;

    /// Removes several keys.
    fn remove_many(&self, keys: &[String]) -> impl Future<Output = StorageResult<()>> + Send;

    /// Returns every stored key and value.
    fn get_all(&self) -> impl Future<Output = StorageResult<HashMap<String, Value>>> + Send;
}
