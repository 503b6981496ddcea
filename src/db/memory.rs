use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::KeyValueStorage;
use crate::error::{StorageReadError, StorageWriteError};

/// In-process storage
///
/// Clones share the same items. Reads and writes can be switched to fail,
/// and raw blobs can be planted, so callers can exercise every storage
/// failure path without a real device.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    quota_bytes: Option<u64>,
    reads_unavailable: bool,
    writes_unavailable: bool,
    write_count: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total size of all stored values
    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryInner {
                quota_bytes: Some(quota_bytes),
                ..MemoryInner::default()
            })),
        }
    }

    pub async fn set_reads_unavailable(&self, unavailable: bool) {
        self.inner.write().await.reads_unavailable = unavailable;
    }

    pub async fn set_writes_unavailable(&self, unavailable: bool) {
        self.inner.write().await.writes_unavailable = unavailable;
    }

    /// Stores a value bypassing quota and failure switches
    pub async fn insert_raw(&self, key: &str, value: &str) {
        self.inner
            .write()
            .await
            .items
            .insert(key.to_string(), value.to_string());
    }

    /// Current value under `key`, bypassing failure switches
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.read().await.items.get(key).cloned()
    }

    /// Number of successful writes so far
    pub async fn write_count(&self) -> u64 {
        self.inner.read().await.write_count
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageReadError> {
        let inner = self.inner.read().await;
        if inner.reads_unavailable {
            return Err(StorageReadError::Unavailable(
                "memory storage reads disabled".to_string(),
            ));
        }
        Ok(inner.items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageWriteError> {
        let mut inner = self.inner.write().await;
        if inner.writes_unavailable {
            return Err(StorageWriteError::Unavailable(
                "memory storage writes disabled".to_string(),
            ));
        }

        if let Some(limit) = inner.quota_bytes {
            let others: u64 = inner
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len() as u64)
                .sum();
            let needed = others + value.len() as u64;
            if needed > limit {
                return Err(StorageWriteError::QuotaExceeded { needed, limit });
            }
        }

        inner.items.insert(key.to_string(), value.to_string());
        inner.write_count += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
