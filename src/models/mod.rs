mod favorites;
mod movie;

pub use favorites::FavoritesCollection;
pub use movie::{Movie, MovieId};
