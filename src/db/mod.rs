pub mod favorite_store;
pub mod file;
pub mod memory;
pub mod redis;
pub mod storage;

pub use self::redis::create_redis_client;
pub use self::redis::RedisStorage;
pub use favorite_store::FavoriteStore;
pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(test)]
pub use storage::MockKeyValueStorage;
pub use storage::{KeyValueStorage, StorageKey};
