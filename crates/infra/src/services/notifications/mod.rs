mod telegram;
mod wx_push;

use futures::future::join_all;
use renewal_keeper_domain::{NotificationConfig, ReminderMessage};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

pub use telegram::TelegramChannel;
pub use wx_push::WxPushChannel;

/// One outbound notification transport
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()>;
}

/// What happened to a message on a single channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelOutcome {
    Sent { channel: &'static str },
    Failed { channel: &'static str, reason: String },
}

impl ChannelOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Fans a message out to every configured channel at once.
///
/// Dispatching never fails: a channel error only shows up as a
/// `ChannelOutcome::Failed` and in the logs.
pub struct NotificationDispatcher {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl NotificationDispatcher {
    pub fn new(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Self { channels }
    }

    /// Builds the channels that have credentials in `config`
    pub fn from_config(
        client: &Client,
        endpoints: &NotificationEndpoints,
        config: &NotificationConfig,
    ) -> Self {
        let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();
        if let Some(credentials) = &config.telegram {
            if !credentials.chat_id.is_empty() && !credentials.bot_token.is_empty() {
                channels.push(Box::new(TelegramChannel::new(
                    client.clone(),
                    &endpoints.telegram_api_base,
                    credentials.clone(),
                )));
            }
        }
        if let Some(token) = config.wx_push_token.as_deref().filter(|t| !t.is_empty()) {
            channels.push(Box::new(WxPushChannel::new(
                client.clone(),
                &endpoints.wx_push_url,
                token,
            )));
        }
        Self::new(channels)
    }

    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    pub async fn dispatch(&self, message: &ReminderMessage) -> Vec<ChannelOutcome> {
        let sends = self.channels.iter().map(|channel| async move {
            let name = channel.name();
            match channel.send(message).await {
                Ok(_) => {
                    info!("Sent `{}` through the {} channel", message.title, name);
                    ChannelOutcome::Sent { channel: name }
                }
                Err(e) => {
                    error!(
                        "Unable to send `{}` through the {} channel: {:?}",
                        message.title, name, e
                    );
                    ChannelOutcome::Failed {
                        channel: name,
                        reason: e.to_string(),
                    }
                }
            }
        });
        join_all(sends).await
    }
}

/// Where the channels are reached
#[derive(Debug, Clone)]
pub struct NotificationEndpoints {
    pub telegram_api_base: String,
    pub wx_push_url: String,
}

/// Delivers a message with the channel settings of one invocation
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify(
        &self,
        config: &NotificationConfig,
        message: &ReminderMessage,
    ) -> Vec<ChannelOutcome>;
}

/// Notifier that talks to the real channel endpoints over http
pub struct HttpNotifier {
    client: Client,
    endpoints: NotificationEndpoints,
}

impl HttpNotifier {
    pub fn new(endpoints: NotificationEndpoints) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, endpoints }
    }
}

#[async_trait::async_trait]
impl INotifier for HttpNotifier {
    async fn notify(
        &self,
        config: &NotificationConfig,
        message: &ReminderMessage,
    ) -> Vec<ChannelOutcome> {
        NotificationDispatcher::from_config(&self.client, &self.endpoints, config)
            .dispatch(message)
            .await
    }
}
