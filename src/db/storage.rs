use std::fmt::Display;

use crate::error::{StorageReadError, StorageWriteError};

/// Key under which a blob is stored
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Key the favorites collection lives under on device
    pub const FAVORITE_LIST: &'static str = "@FavoriteList";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn favorite_list() -> Self {
        Self::new(Self::FAVORITE_LIST)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self::favorite_list()
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asynchronous string key-value medium
///
/// Mirrors the device storage API: a missing key reads as `None`, and a write
/// replaces the whole value or fails leaving the old value in place.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageReadError>;

    /// Replaces the value stored under `key`
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageWriteError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
