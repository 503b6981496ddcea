use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::db::{
    create_redis_client, FavoriteStore, FileStorage, KeyValueStorage, MemoryStorage, RedisStorage,
};
use crate::services::FavoriteService;

/// Shared application context handed to every screen
///
/// Screens reach favorites only through `favorites`; nothing else holds the
/// storage medium.
#[derive(Clone)]
pub struct AppState {
    pub favorites: FavoriteService,
}

impl AppState {
    /// Creates a context over an already built storage medium
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            favorites: FavoriteService::with_storage(storage),
        }
    }

    /// Creates a context that keeps favorites in memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Builds the storage medium described by `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match config.storage_backend {
            StorageBackend::File => Arc::new(
                FileStorage::new(&config.storage_dir).with_quota(config.quota_bytes),
            ),
            StorageBackend::Memory => match config.quota_bytes {
                Some(quota) => Arc::new(MemoryStorage::with_quota(quota)),
                None => Arc::new(MemoryStorage::new()),
            },
            StorageBackend::Redis => {
                Arc::new(RedisStorage::new(create_redis_client(&config.redis_url)?))
            }
        };

        tracing::info!(
            backend = storage.name(),
            key = %config.storage_key,
            "Favorites storage initialized"
        );

        let store = FavoriteStore::new(storage, config.key());
        Ok(Self {
            favorites: FavoriteService::new(store),
        })
    }
}
