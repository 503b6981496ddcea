//! On-device favorites for the movie browser.
//!
//! [`FavoriteStore`](db::FavoriteStore) keeps the whole collection as one
//! JSON blob under `@FavoriteList`. [`FavoriteService`] is the only writer:
//! it enforces one entry per movie id and serializes mutations. Screens get
//! the service through [`AppState`] and drive their heart icon with a
//! [`FavoriteIndicator`], which changes only after storage confirms.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use error::{FavoritesError, FavoritesResult, StorageReadError, StorageWriteError};
pub use models::{FavoritesCollection, Movie, MovieId};
pub use services::{FavoriteIndicator, FavoriteService, FavoriteState};
pub use state::AppState;
