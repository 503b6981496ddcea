pub mod favorites;
pub mod indicator;

pub use favorites::FavoriteService;
pub use indicator::{FavoriteIndicator, FavoriteState};
