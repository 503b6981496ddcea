use std::sync::Arc;

use super::{KeyValueStorage, StorageKey};
use crate::error::{StorageReadError, StorageWriteError};
use crate::models::{FavoritesCollection, Movie};

/// Durable home of the favorites collection
///
/// The whole collection is one JSON array under a single key. Loading and
/// saving always move the entire collection; there are no partial writes.
pub struct FavoriteStore {
    storage: Arc<dyn KeyValueStorage>,
    key: StorageKey,
}

impl FavoriteStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: StorageKey) -> Self {
        Self { storage, key }
    }

    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Loads the collection, reporting corrupted data as an error
    ///
    /// A missing blob is an empty collection. Legacy blobs that repeat an
    /// id are collapsed to the first occurrence.
    pub async fn try_load(&self) -> Result<FavoritesCollection, StorageReadError> {
        let Some(json) = self.storage.get_item(self.key.as_str()).await? else {
            tracing::debug!(key = %self.key, "No favorites stored yet");
            return Ok(FavoritesCollection::new());
        };

        let movies: Vec<Movie> =
            serde_json::from_str(&json).map_err(|e| StorageReadError::Corrupted {
                key: self.key.to_string(),
                reason: e.to_string(),
            })?;

        let (favorites, dropped) = FavoritesCollection::from_movies(movies);
        if dropped > 0 {
            tracing::warn!(
                key = %self.key,
                dropped,
                "Stored favorites contained duplicate ids"
            );
        }

        Ok(favorites)
    }

    /// Loads the collection, treating corrupted data as empty
    ///
    /// Only an unavailable medium is an error here.
    pub async fn load(&self) -> Result<FavoritesCollection, StorageReadError> {
        match self.try_load().await {
            Err(StorageReadError::Corrupted { key, reason }) => {
                tracing::warn!(
                    key = %key,
                    reason = %reason,
                    "Stored favorites are corrupted, starting from an empty collection"
                );
                Ok(FavoritesCollection::new())
            }
            result => result,
        }
    }

    /// Replaces the stored collection
    pub(crate) async fn save(
        &self,
        favorites: &FavoritesCollection,
    ) -> Result<(), StorageWriteError> {
        let json = serde_json::to_string(favorites)
            .map_err(|e| StorageWriteError::Serialization(e.to_string()))?;

        self.storage.set_item(self.key.as_str(), &json).await?;
        tracing::debug!(key = %self.key, count = favorites.len(), "Favorites saved");
        Ok(())
    }
}
