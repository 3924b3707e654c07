mod domains;
mod kv;
mod last_notified;
mod sessions;

pub use domains::{DomainListRepo, DomainListRepoError};
pub use kv::{IKVRepo, InMemoryKVRepo, PostgresKVRepo};
pub use last_notified::LastNotifiedRepo;
pub use sessions::{PasswordRepo, SessionRepo};

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

/// Namespace holding the domain list, the password and sessions
const SECRETS_NAMESPACE: &str = "secrets";
/// Namespace holding the dedup index, keyed by domain name
const LAST_NOTIFIED_NAMESPACE: &str = "last_notified";

#[derive(Clone)]
pub struct Repos {
    pub domains: DomainListRepo,
    pub last_notified: LastNotifiedRepo,
    pub sessions: SessionRepo,
    pub password: PasswordRepo,
}

impl Repos {
    pub fn from_stores(secrets: Arc<dyn IKVRepo>, last_notified: Arc<dyn IKVRepo>) -> Self {
        Self {
            domains: DomainListRepo::new(secrets.clone()),
            last_notified: LastNotifiedRepo::new(last_notified),
            sessions: SessionRepo::new(secrets.clone()),
            password: PasswordRepo::new(secrets),
        }
    }

    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        info!("DB CHECKING CONNECTION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self::from_stores(
            Arc::new(PostgresKVRepo::new(pool.clone(), SECRETS_NAMESPACE)),
            Arc::new(PostgresKVRepo::new(pool, LAST_NOTIFIED_NAMESPACE)),
        ))
    }

    pub fn create_inmemory() -> Self {
        Self::from_stores(
            Arc::new(InMemoryKVRepo::new()),
            Arc::new(InMemoryKVRepo::new()),
        )
    }
}
