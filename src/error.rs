use crate::models::MovieId;

/// Failures while reading the favorites blob
#[derive(thiserror::Error, Debug)]
pub enum StorageReadError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupted data under key {key}: {reason}")]
    Corrupted { key: String, reason: String },
}

/// Failures while writing the favorites blob
///
/// Every backend guarantees the previously stored blob is still in place
/// when one of these is returned.
#[derive(thiserror::Error, Debug)]
pub enum StorageWriteError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: u64, limit: u64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by the favorites service
#[derive(thiserror::Error, Debug)]
pub enum FavoritesError {
    #[error("Storage read error: {0}")]
    Read(#[from] StorageReadError),

    #[error("Storage write error: {0}")]
    Write(#[from] StorageWriteError),

    #[error("Indicator tracks movie {expected} but was toggled with movie {actual}")]
    MovieMismatch { expected: MovieId, actual: MovieId },
}

pub type FavoritesResult<T> = Result<T, FavoritesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = StorageReadError::Corrupted {
            key: "@FavoriteList".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupted data under key @FavoriteList: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_write_error_wraps_into_favorites_error() {
        let err: FavoritesError = StorageWriteError::QuotaExceeded {
            needed: 2048,
            limit: 1024,
        }
        .into();
        assert!(matches!(
            err,
            FavoritesError::Write(StorageWriteError::QuotaExceeded { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Storage write error: Storage quota exceeded: need 2048 bytes, limit is 1024"
        );
    }
}
