//! Storage medium abstraction
//!
//! The persistent key-value medium behind every collection, kept behind a
//! trait so tests (and the transient session layer) can substitute an
//! in-memory implementation for the durable file-backed one.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::StorageConfig;
use crate::utils::errors::{EventBookError, Result};

/// A named slot of JSON text. Implementations own durability; callers own
/// the shape of the stored value.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    /// Read the raw JSON stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn store(&self, key: &str, value: String) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an
    /// error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Deserialize the value under `key`, or `None` when the key is absent.
pub async fn load_json<T: DeserializeOwned>(
    medium: &dyn StorageMedium,
    key: &str,
) -> Result<Option<T>> {
    match medium.load(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and persist it under `key`.
pub async fn save_json<T: Serialize>(
    medium: &dyn StorageMedium,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    medium.store(key, raw).await
}

/// In-process storage medium. Used by tests and as the default backing for
/// the transient session slot, which does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageMedium for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn store(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// File-backed storage medium: one `<key>.json` file per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Open a file-backed medium rooted at `data_dir`, creating the
    /// directory if needed.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;
        debug!(data_dir = %data_dir.display(), "Opened file-backed storage");
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys name collections, not paths.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(EventBookError::InvalidInput(format!(
                "Invalid storage key: {key}"
            )));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl StorageMedium for JsonFileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        // Write through a temp file so a crash mid-write cannot truncate the
        // collection.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value.as_bytes()).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!(key = key, bytes = value.len(), "Stored collection");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Create the durable storage medium described by configuration.
pub async fn create_medium(config: &StorageConfig) -> Result<Arc<dyn StorageMedium>> {
    let storage = JsonFileStorage::open(config.data_dir.clone()).await?;
    tracing::info!(data_dir = %config.data_dir, "Storage medium ready");
    Ok(Arc::new(storage))
}
