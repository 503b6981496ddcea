use serde::{Deserialize, Serialize, Serializer};

use super::{Movie, MovieId};

/// The user's favorite movies, unique by id, in insertion order
///
/// Serialized as a bare JSON array of movies. Deserializing an array that
/// repeats an id keeps the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<Movie>")]
pub struct FavoritesCollection {
    movies: Vec<Movie>,
}

impl FavoritesCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Builds a collection from raw records, dropping repeated ids
    ///
    /// Returns the collection and the number of records dropped.
    pub fn from_movies(movies: Vec<Movie>) -> (Self, usize) {
        let total = movies.len();
        let mut collection = Self::new();
        for movie in movies {
            collection.insert(movie);
        }
        let dropped = total - collection.len();
        (collection, dropped)
    }

    /// Whether a movie with this id is present
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.movies.iter().any(|m| m.id == movie_id)
    }

    /// Appends the movie unless its id is already present
    ///
    /// Returns `true` if the collection changed.
    pub fn insert(&mut self, movie: Movie) -> bool {
        if self.contains(movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Removes the movie with this id, if any
    pub fn remove(&mut self, movie_id: MovieId) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == movie_id)?;
        Some(self.movies.remove(index))
    }

    pub fn get(&self, movie_id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|m| m.id).collect()
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }
}

impl From<Vec<Movie>> for FavoritesCollection {
    fn from(movies: Vec<Movie>) -> Self {
        Self::from_movies(movies).0
    }
}

impl Serialize for FavoritesCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.movies.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_unique_by_id() {
        let mut favorites = FavoritesCollection::new();
        assert!(favorites.insert(Movie::new(42, "X")));
        assert!(!favorites.insert(Movie::new(42, "X (director's cut)")));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.get(42).unwrap().title(), Some("X"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesCollection::new();
        favorites.insert(Movie::new(1, "A"));
        assert!(favorites.remove(2).is_none());
        assert_eq!(favorites.ids(), vec![1]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = FavoritesCollection::new();
        favorites.insert(Movie::new(3, "C"));
        favorites.insert(Movie::new(1, "A"));
        favorites.insert(Movie::new(2, "B"));
        favorites.remove(1);
        assert_eq!(favorites.ids(), vec![3, 2]);

        let titles: Vec<_> = favorites.iter().filter_map(|m| m.title()).collect();
        assert_eq!(titles, vec!["C", "B"]);
        assert_eq!(favorites.into_movies().len(), 2);
    }

    #[test]
    fn test_from_movies_drops_duplicates() {
        let (favorites, dropped) = FavoritesCollection::from_movies(vec![
            Movie::new(7, "first"),
            Movie::new(8, "other"),
            Movie::new(7, "second"),
        ]);
        assert_eq!(dropped, 1);
        assert_eq!(favorites.ids(), vec![7, 8]);
        assert_eq!(favorites.get(7).unwrap().title(), Some("first"));
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut favorites = FavoritesCollection::new();
        favorites.insert(Movie::new(42, "X"));
        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"[{"id":42,"title":"X"}]"#);

        let empty = serde_json::to_string(&FavoritesCollection::new()).unwrap();
        assert_eq!(empty, "[]");
    }

    #[test]
    fn test_deserialize_deduplicates() {
        let favorites: FavoritesCollection =
            serde_json::from_str(r#"[{"id":1},{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(favorites.ids(), vec![1, 2]);
    }
}
