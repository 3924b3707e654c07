use super::kv::IKVRepo;
use std::sync::Arc;

/// The dedup index: which calendar day a reminder was last sent for a
/// domain. Keyed by the bare domain name in a store of its own.
#[derive(Clone)]
pub struct LastNotifiedRepo {
    store: Arc<dyn IKVRepo>,
}

impl LastNotifiedRepo {
    pub fn new(store: Arc<dyn IKVRepo>) -> Self {
        Self { store }
    }

    pub async fn find(&self, domain: &str) -> anyhow::Result<Option<String>> {
        self.store.get(domain).await
    }

    pub async fn save(&self, domain: &str, date: &str) -> anyhow::Result<()> {
        self.store.put(domain, date, None).await
    }
}
