use super::IKVRepo;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at <= now)
    }
}

/// Used when no database is configured and in tests. Expired entries are
/// dropped lazily on access.
pub struct InMemoryKVRepo {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryKVRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::Error::msg("The inmemory key-value store is poisoned"))
    }
}

impl Default for InMemoryKVRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKVRepo for InMemoryKVRepo {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> anyhow::Result<()> {
        let mut entries = self.lock()?;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
