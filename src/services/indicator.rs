use crate::{
    error::{FavoritesError, FavoritesResult},
    models::{Movie, MovieId},
};

use super::FavoriteService;

/// What a screen currently shows for one movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    /// Not resolved yet
    Unknown,
    NotFavorite,
    Favorite,
}

impl From<bool> for FavoriteState {
    fn from(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteState::Favorite
        } else {
            FavoriteState::NotFavorite
        }
    }
}

/// Per-screen favorite flag for a single movie
///
/// The state only moves on a resolved service result. A failed toggle
/// leaves it where it was and hands the error back to the screen.
#[derive(Debug, Clone)]
pub struct FavoriteIndicator {
    movie_id: MovieId,
    state: FavoriteState,
}

impl FavoriteIndicator {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            state: FavoriteState::Unknown,
        }
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn state(&self) -> FavoriteState {
        self.state
    }

    pub fn is_favorite(&self) -> bool {
        self.state == FavoriteState::Favorite
    }

    /// Resolves the initial state when the screen appears
    pub async fn mount(&mut self, service: &FavoriteService) -> FavoriteState {
        self.state = service.is_favorite(self.movie_id).await.into();
        self.state
    }

    /// Handles a tap on the favorite affordance
    pub async fn toggle(
        &mut self,
        service: &FavoriteService,
        movie: &Movie,
    ) -> FavoritesResult<FavoriteState> {
        if movie.id != self.movie_id {
            return Err(FavoritesError::MovieMismatch {
                expected: self.movie_id,
                actual: movie.id,
            });
        }

        let currently_favorite = match self.state {
            FavoriteState::Unknown => service.is_favorite(self.movie_id).await,
            state => state == FavoriteState::Favorite,
        };

        match service.toggle_favorite(movie, currently_favorite).await {
            Ok(now_favorite) => {
                self.state = now_favorite.into();
                Ok(self.state)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    movie_id = self.movie_id,
                    "Favorite toggle failed, indicator unchanged"
                );
                Err(e)
            }
        }
    }
}
