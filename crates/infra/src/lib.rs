mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DomainListRepo, DomainListRepoError, IKVRepo, InMemoryKVRepo, LastNotifiedRepo,
    PasswordRepo, PostgresKVRepo, Repos, SessionRepo,
};
pub use services::notifications::{
    ChannelOutcome, HttpNotifier, INotifier, NotificationChannel, NotificationDispatcher,
    NotificationEndpoints, TelegramChannel, WxPushChannel,
};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct KeeperContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl KeeperContext {
    fn create(repos: Repos, config: Config) -> Self {
        let notifier = HttpNotifier::new(NotificationEndpoints {
            telegram_api_base: config.telegram_api_base.clone(),
            wx_push_url: config.wx_push_url.clone(),
        });
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(notifier),
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create(Repos::create_inmemory(), Config::new())
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Uses postgres when `DATABASE_URL` is set and an inmemory store
/// otherwise.
pub async fn setup_context() -> anyhow::Result<KeeperContext> {
    let config = Config::new();
    let repos = match std::env::var("DATABASE_URL") {
        Ok(connection_string) => Repos::create_postgres(&connection_string).await?,
        Err(_) => {
            warn!("DATABASE_URL is not set. Domains and sessions are kept in memory and lost on restart.");
            Repos::create_inmemory()
        }
    };

    let ctx = KeeperContext::create(repos, config);
    bootstrap_password(&ctx).await?;
    Ok(ctx)
}

async fn bootstrap_password(ctx: &KeeperContext) -> anyhow::Result<()> {
    match &ctx.config.bootstrap_password {
        Some(password) => {
            if ctx.repos.password.bootstrap(password).await? {
                info!("Stored the dashboard password from the PASSWORD environment variable");
            }
        }
        None => {
            if ctx.repos.password.find().await?.is_none() {
                warn!("No dashboard password is set. Set PASSWORD to be able to log in.");
            }
        }
    }
    Ok(())
}
