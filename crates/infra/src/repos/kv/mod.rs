mod inmemory;
mod postgres;

use std::time::Duration;

pub use inmemory::InMemoryKVRepo;
pub use postgres::PostgresKVRepo;

/// A namespaced string key-value store with optional expiry per entry
#[async_trait::async_trait]
pub trait IKVRepo: Send + Sync {
    /// Expired entries are never returned
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Creates or overwrites `key`. Without `ttl` the entry never expires.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> anyhow::Result<()>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}
