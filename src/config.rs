use serde::Deserialize;
use std::path::PathBuf;

use crate::db::StorageKey;

/// Which medium backs the favorites blob
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key under `storage_dir`
    File,
    /// In-process only, lost on restart
    Memory,
    /// Shared Redis instance at `redis_url`
    Redis,
}

/// Favorites configuration loaded from `FAVORITES_*` environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Storage medium for the favorites blob
    #[serde(default = "default_storage_backend")]
    pub storage_backend: StorageBackend,

    /// Directory holding the blob when using the file backend
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Key the favorites collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Optional upper bound on stored bytes
    #[serde(default)]
    pub quota_bytes: Option<u64>,

    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

fn default_storage_backend() -> StorageBackend {
    StorageBackend::File
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_storage_key() -> String {
    StorageKey::FAVORITE_LIST.to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: default_storage_backend(),
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            quota_bytes: None,
            redis_url: default_redis_url(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("FAVORITES_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Storage key as a typed value
    pub fn key(&self) -> StorageKey {
        StorageKey::new(self.storage_key.clone())
    }
}
