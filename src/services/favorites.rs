use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::instrument;

use crate::{
    db::{FavoriteStore, KeyValueStorage, StorageKey},
    error::FavoritesResult,
    models::{FavoritesCollection, Movie, MovieId},
};

/// Query and mutation layer over the favorites store
///
/// Every mutation is load-entire, mutate, save-entire. Mutations issued
/// through this service or any of its clones are serialized by one lock, so
/// two screens toggling at once cannot lose each other's update. Separate
/// services over the same medium are not coordinated.
#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<FavoriteStore>,
    write_lock: Arc<Mutex<()>>,
}

impl FavoriteService {
    pub fn new(store: FavoriteStore) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a service over `storage` using the default favorites key
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::new(FavoriteStore::new(storage, StorageKey::favorite_list()))
    }

    /// Whether the movie is currently a favorite
    ///
    /// A storage failure is logged and reported as `false`.
    #[instrument(skip(self))]
    pub async fn is_favorite(&self, movie_id: MovieId) -> bool {
        match self.store.load().await {
            Ok(favorites) => favorites.contains(movie_id),
            Err(e) => {
                tracing::warn!(error = %e, "Favorite lookup failed, reporting not favorite");
                false
            }
        }
    }

    /// The full collection, for screens that list favorites
    pub async fn favorites(&self) -> FavoritesResult<FavoritesCollection> {
        Ok(self.store.load().await?)
    }

    /// Adds the movie unless it is already a favorite
    ///
    /// Nothing is written if the collection cannot be read.
    #[instrument(skip(self, movie), fields(movie_id = movie.id))]
    pub async fn add_favorite(&self, movie: &Movie) -> FavoritesResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.store.load().await?;
        if !favorites.insert(movie.clone()) {
            tracing::debug!("Movie already a favorite");
            return Ok(());
        }

        self.store.save(&favorites).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save favorite");
            e
        })?;

        tracing::info!(count = favorites.len(), "Favorite added");
        Ok(())
    }

    /// Removes the movie if it is a favorite
    ///
    /// Nothing is written if the collection cannot be read.
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, movie_id: MovieId) -> FavoritesResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.store.load().await?;
        if favorites.remove(movie_id).is_none() {
            tracing::debug!("Movie was not a favorite");
            return Ok(());
        }

        self.store.save(&favorites).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save favorites after removal");
            e
        })?;

        tracing::info!(count = favorites.len(), "Favorite removed");
        Ok(())
    }

    /// Flips the favorite state and returns the new state once it is stored
    pub async fn toggle_favorite(
        &self,
        movie: &Movie,
        currently_favorite: bool,
    ) -> FavoritesResult<bool> {
        if currently_favorite {
            self.remove_favorite(movie.id).await?;
            Ok(false)
        } else {
            self.add_favorite(movie).await?;
            Ok(true)
        }
    }
}
