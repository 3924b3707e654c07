use super::NotificationChannel;
use renewal_keeper_domain::{ReminderMessage, TelegramCredentials};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends the rich variant of a message through the chat-bot API
pub struct TelegramChannel {
    client: Client,
    api_base: String,
    credentials: TelegramCredentials,
}

impl TelegramChannel {
    pub fn new(client: Client, api_base: &str, credentials: TelegramCredentials) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base, self.credentials.bot_token
        )
    }
}

#[async_trait::async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        let body = SendMessageBody {
            chat_id: &self.credentials.chat_id,
            text: &message.rich,
        };
        self.client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
