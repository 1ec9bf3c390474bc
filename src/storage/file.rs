//! Single-document JSON store on local disk.
//!
//! The whole map is rewritten on every mutation: serialized to a temp file,
//! then renamed over the target so a crash never leaves a torn document.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::{StorageError, StorageResult};
use super::kv::KvStore;

const TEMP_EXTENSION: &str = "tmp";

/// Key-value store persisted as one JSON object.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file opens as an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                StorageError::Serialization(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_EXTENSION);
        self.path.with_file_name(name)
    }

    async fn persist(&self, entries: &BTreeMap<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::Io(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", temp_path.display(), e)))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }

    /// Applies `mutate` to a copy of the map and commits it only if the write succeeds.
    async fn update<F>(&self, mutate: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, Value>) + Send,
    {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        mutate(&mut next);
        self.persist(&next).await?;
        *entries = next;
        Ok(())
    }
}

impl KvStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn get_many(&self, keys: &[String]) -> StorageResult<HashMap<String, Value>> {
        let entries = self.entries.lock().await;
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(key).map(|v| (key.clone(), v.clone())))
            .collect())
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }

    async fn remove_many(&self, keys: &[String]) -> StorageResult<()> {
        self.update(|entries| {
            for key in keys {
                entries.remove(key);
            }
        })
        .await
    }

    async fn get_all(&self) -> StorageResult<HashMap<String, Value>> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
