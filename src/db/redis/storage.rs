use redis::AsyncCommands;
use redis::Client;

use crate::db::KeyValueStorage;
use crate::error::{StorageReadError, StorageWriteError};

/// Creates a Redis client for favorites storage
///
/// Only parses the URL; no connection is made until the first read or write.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Storage backed by a Redis instance
///
/// Values are written with plain `SET` and no expiry. A single `SET`
/// replaces the value atomically, so a failed write leaves the old value.
#[derive(Clone)]
pub struct RedisStorage {
    redis_client: Client,
}

impl RedisStorage {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for RedisStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageReadError> {
        let mut conn = self
            .redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StorageReadError::Unavailable(e.to_string()))?;

        conn.get(key).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis get failed");
            StorageReadError::Unavailable(e.to_string())
        })
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageWriteError> {
        let mut conn = self
            .redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StorageWriteError::Unavailable(e.to_string()))?;

        let _: () = conn.set(key, value).await.map_err(|e| {
            tracing::error!(error = %e, key = %key, "Redis set failed");
            StorageWriteError::Unavailable(e.to_string())
        })?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(create_redis_client("not a url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let client = create_redis_client("redis://127.0.0.1:1").unwrap();
        let storage = RedisStorage::new(client);

        let read = storage.get_item("@FavoriteList").await;
        assert!(matches!(read, Err(StorageReadError::Unavailable(_))));

        let write = storage.set_item("@FavoriteList", "[]").await;
        assert!(matches!(write, Err(StorageWriteError::Unavailable(_))));
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_set_then_get() {
        let client = create_redis_client(&redis_url()).unwrap();
        let storage = RedisStorage::new(client.clone());
        let key = "@FavoriteList:test_set_then_get";

        storage.set_item(key, r#"[{"id":42}]"#).await.unwrap();
        let value = storage.get_item(key).await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"id":42}]"#));

        // Clean up
        let mut conn = client.get_multiplexed_async_connection().await.unwrap();
        let _: () = conn.del(key).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_missing_key_reads_none() {
        let client = create_redis_client(&redis_url()).unwrap();
        let storage = RedisStorage::new(client);

        let value = storage
            .get_item("@FavoriteList:nonexistent_key_12345")
            .await
            .unwrap();
        assert_eq!(value, None);
    }
}
