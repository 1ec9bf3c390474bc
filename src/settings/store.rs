use std::sync::Arc;

use tracing::{info, warn};

use super::error::{SettingsError, SettingsResult};
use super::{Settings, SettingsPatch};
use crate::constants::SETTINGS_KEY;
use crate::storage::{KvStore, StorageError};

/// Reads and writes [`Settings`] in the shared key-value store.
pub struct SettingsStore<K: KvStore> {
    store: Arc<K>,
}

impl<K: KvStore> SettingsStore<K> {
    pub fn new(store: Arc<K>) -> Self {
        Self { store }
    }

    /// Returns the stored settings merged over defaults.
    ///
    /// Fails open: storage or decode errors are logged and defaults returned.
    pub async fn get_settings(&self) -> Settings {
        match self.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to read settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Applies `patch`, validates, persists, and returns the new settings.
    ///
    /// The patch is applied over [`get_settings`](Self::get_settings), so an
    /// unreadable stored object is replaced rather than blocking the update.
    pub async fn update_settings(&self, patch: &SettingsPatch) -> SettingsResult<Settings> {
        let current = self.get_settings().await;
        let updated = current.merged(patch)?;
        updated.validate()?;

        let value = serde_json::to_value(&updated)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(SETTINGS_KEY, value).await?;

        info!(
            enabled = updated.enabled,
            threshold = updated.threshold,
            cache_expiry_hours = updated.cache_expiry_hours,
            "Settings updated"
        );
        Ok(updated)
    }

    async fn load(&self) -> SettingsResult<Settings> {
        let Some(value) = self.store.get(SETTINGS_KEY).await? else {
            return Ok(Settings::default());
        };

        serde_json::from_value(value)
            .map_err(|e| SettingsError::Storage(StorageError::Serialization(e.to_string())))
    }
}

impl<K: KvStore> Clone for SettingsStore<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K: KvStore> std::fmt::Debug for SettingsStore<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore").finish_non_exhaustive()
    }
}
