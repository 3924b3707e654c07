use super::kv::IKVRepo;
use renewal_keeper_domain::{
    parse_domain_list, serialize_domain_list, DomainList, DomainListError, DomainRecord,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

const DOMAINS_KEY: &str = "domains";

#[derive(Error, Debug)]
pub enum DomainListRepoError {
    #[error("Unable to access the key-value store: {0}")]
    Storage(anyhow::Error),
    #[error(transparent)]
    Malformed(#[from] DomainListError),
}

impl From<anyhow::Error> for DomainListRepoError {
    fn from(e: anyhow::Error) -> Self {
        Self::Storage(e)
    }
}

/// The full list of `DomainRecord`s, persisted as one JSON array. Every
/// change reads the whole list, modifies it and writes it back, so entries
/// that are not records are dropped by the next change.
#[derive(Clone)]
pub struct DomainListRepo {
    store: Arc<dyn IKVRepo>,
}

impl DomainListRepo {
    pub fn new(store: Arc<dyn IKVRepo>) -> Self {
        Self { store }
    }

    /// The stored list together with the entries that could not be read
    pub async fn load(&self) -> Result<DomainList, DomainListRepoError> {
        let raw = self.store.get(DOMAINS_KEY).await?;
        let list = parse_domain_list(raw.as_deref())?;
        for entry in &list.skipped {
            warn!(
                "Ignoring entry {} of the domain list: {}",
                entry.index, entry.reason
            );
        }
        Ok(list)
    }

    pub async fn find_all(&self) -> Result<Vec<DomainRecord>, DomainListRepoError> {
        Ok(self.load().await?.records)
    }

    pub async fn save_all(&self, records: &[DomainRecord]) -> anyhow::Result<()> {
        self.store
            .put(DOMAINS_KEY, &serialize_domain_list(records), None)
            .await
    }

    /// Stores the raw payload as is, used to seed the list
    pub async fn save_raw(&self, raw: &str) -> anyhow::Result<()> {
        self.store.put(DOMAINS_KEY, raw, None).await
    }
}
