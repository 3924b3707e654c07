use super::kv::IKVRepo;
use renewal_keeper_utils::create_random_secret;
use std::sync::Arc;
use std::time::Duration;

const SESSION_KEY_PREFIX: &str = "auth_token:";
const SESSION_TOKEN_LEN: usize = 32;

fn session_key(token: &str) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, token)
}

/// Dashboard sessions handed out after a successful password check
#[derive(Clone)]
pub struct SessionRepo {
    store: Arc<dyn IKVRepo>,
}

impl SessionRepo {
    pub fn new(store: Arc<dyn IKVRepo>) -> Self {
        Self { store }
    }

    /// Creates a session valid for `ttl` and returns its token
    pub async fn create(&self, ttl: Duration) -> anyhow::Result<String> {
        let token = create_random_secret(SESSION_TOKEN_LEN);
        self.store.put(&session_key(&token), "valid", Some(ttl)).await?;
        Ok(token)
    }

    pub async fn is_valid(&self, token: &str) -> anyhow::Result<bool> {
        if token.is_empty() {
            return Ok(false);
        }
        Ok(self.store.get(&session_key(token)).await?.is_some())
    }
}

/// The shared dashboard password
#[derive(Clone)]
pub struct PasswordRepo {
    store: Arc<dyn IKVRepo>,
}

impl PasswordRepo {
    const KEY: &'static str = "password";

    pub fn new(store: Arc<dyn IKVRepo>) -> Self {
        Self { store }
    }

    pub async fn find(&self) -> anyhow::Result<Option<String>> {
        self.store.get(Self::KEY).await
    }

    pub async fn save(&self, password: &str) -> anyhow::Result<()> {
        self.store.put(Self::KEY, password, None).await
    }

    /// Stores `password` unless one has been set already. Returns whether
    /// it was stored.
    pub async fn bootstrap(&self, password: &str) -> anyhow::Result<bool> {
        if self.find().await?.is_some() {
            return Ok(false);
        }
        self.save(password).await?;
        Ok(true)
    }
}
