//! Failure injection for storage-dependent tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use super::error::{StorageError, StorageResult};
use super::kv::KvStore;

/// Wraps a store and fails reads and/or writes on demand.
#[derive(Debug, Clone, Default)]
pub struct FlakyStore<K> {
    inner: K,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl<K: KvStore> FlakyStore<K> {
    pub fn new(inner: K) -> Self {
        Self {
            inner,
            fail_reads: Arc::new(AtomicBool::new(false)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> StorageResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("injected read failure".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed(
                "injected write failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl<K: KvStore> KvStore for FlakyStore<K> {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        self.check_read()?;
        self.inner.get(key).await
    }

    async fn get_many(&self, keys: &[String]) -> StorageResult<HashMap<String, Value>> {
        self.check_read()?;
        self.inner.get_many(keys).await
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        self.check_write()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.check_write()?;
        self.inner.remove(key).await
    }

    async fn remove_many(&self, keys: &[String]) -> StorageResult<()> {
        self.check_write()?;
        self.inner.remove_many(keys).await
    }

    async fn get_all(&self) -> StorageResult<HashMap<String, Value>> {
        self.check_read()?;
        self.inner.get_all().await
    }
}
