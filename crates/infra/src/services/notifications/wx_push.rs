use super::NotificationChannel;
use renewal_keeper_domain::ReminderMessage;
use reqwest::{header::AUTHORIZATION, Client};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PushBody<'a> {
    title: &'a str,
    content: &'a str,
}

/// Sends the plain variant of a message to the push webhook
pub struct WxPushChannel {
    client: Client,
    url: String,
    token: String,
}

impl WxPushChannel {
    pub fn new(client: Client, url: &str, token: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for WxPushChannel {
    fn name(&self) -> &'static str {
        "wx_push"
    }

    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        let body = PushBody {
            title: &message.title,
            content: &message.plain,
        };
        self.client
            .post(&self.url)
            .header(AUTHORIZATION, self.token.as_str())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
