use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned to a movie by the metadata API
pub type MovieId = i64;

/// A movie record as supplied by the metadata client
///
/// Only `id` is decoded strictly. Every other field is kept as the raw JSON
/// the API returned, so a stored movie round-trips unchanged whatever its
/// shape. The display accessors read from that map and yield `None` when a
/// field is missing or has an unexpected type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Movie {
    /// Creates a movie with only an id and a title
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self::with_id(id).with_field("title", title.into())
    }

    /// Creates a movie with no fields besides its id
    pub fn with_id(id: MovieId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Sets a raw field, replacing any previous value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn poster_path(&self) -> Option<&str> {
        self.str_field("poster_path")
    }

    pub fn overview(&self) -> Option<&str> {
        self.str_field("overview")
    }

    pub fn release_date(&self) -> Option<&str> {
        self.str_field("release_date")
    }

    pub fn original_language(&self) -> Option<&str> {
        self.str_field("original_language")
    }

    pub fn vote_average(&self) -> Option<f64> {
        self.fields.get("vote_average").and_then(Value::as_f64)
    }

    pub fn popularity(&self) -> Option<f64> {
        self.fields.get("popularity").and_then(Value::as_f64)
    }

    pub fn vote_count(&self) -> Option<u64> {
        self.fields.get("vote_count").and_then(Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_movie() {
        let movie = Movie::new(42, "X");
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title(), Some("X"));
        assert_eq!(movie.fields.len(), 1);
        assert_eq!(serde_json::to_string(&movie).unwrap(), r#"{"id":42,"title":"X"}"#);
    }

    #[test]
    fn test_record_survives_round_trip() {
        let raw = json!({
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "vote_average": 8.2,
            "vote_count": 24000,
            "adult": false,
            "genre_ids": [28, 878]
        });

        let movie: Movie = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(movie.vote_count(), Some(24000));
        assert_eq!(movie.vote_average(), Some(8.2));
        assert_eq!(movie.fields.get("genre_ids"), Some(&json!([28, 878])));

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_null_poster_path_is_kept() {
        let raw = r#"{"id":1,"poster_path":null,"title":"A"}"#;
        let movie: Movie = serde_json::from_str(raw).unwrap();

        assert_eq!(movie.poster_path(), None);
        assert_eq!(serde_json::to_string(&movie).unwrap(), raw);
    }

    #[test]
    fn test_off_type_fields_decode_and_keep_value() {
        let raw = json!({ "id": 2, "title": 7, "vote_count": -1, "popularity": "high" });
        let movie: Movie = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(movie.title(), None);
        assert_eq!(movie.vote_count(), None);
        assert_eq!(movie.popularity(), None);
        assert_eq!(serde_json::to_value(&movie).unwrap(), raw);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<Movie, _> = serde_json::from_value(json!({ "title": "No id" }));
        assert!(result.is_err());
    }
}
