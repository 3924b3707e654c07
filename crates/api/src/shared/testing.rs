use renewal_keeper_domain::{NotificationConfig, ReminderMessage};
use renewal_keeper_infra::{ChannelOutcome, IKVRepo, INotifier, KeeperContext, StaticSys};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Notifier that keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<ReminderMessage>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<ReminderMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl INotifier for RecordingNotifier {
    async fn notify(
        &self,
        config: &NotificationConfig,
        message: &ReminderMessage,
    ) -> Vec<ChannelOutcome> {
        self.sent.lock().unwrap().push(message.clone());
        let mut outcomes = Vec::new();
        if config.telegram.is_some() {
            outcomes.push(ChannelOutcome::Sent {
                channel: "telegram",
            });
        }
        if config.wx_push_token.is_some() {
            outcomes.push(ChannelOutcome::Sent { channel: "wx_push" });
        }
        outcomes
    }
}

/// An inmemory context frozen at `now` that records notifications
pub fn setup_context_at(now: i64) -> (KeeperContext, Arc<RecordingNotifier>) {
    let mut ctx = KeeperContext::create_inmemory();
    ctx.sys = Arc::new(StaticSys {
        timestamp_millis: now,
    });
    let notifier = Arc::new(RecordingNotifier::default());
    ctx.notifier = notifier.clone();
    (ctx, notifier)
}

/// Key-value store whose writes always fail, and reads too when
/// `fail_reads` is set
pub struct FailingKVRepo {
    pub fail_reads: bool,
}

#[async_trait::async_trait]
impl IKVRepo for FailingKVRepo {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads {
            Err(anyhow::Error::msg("Connection reset by peer"))
        } else {
            Ok(None)
        }
    }

    async fn put(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("Connection reset by peer"))
    }

    async fn delete(&self, _key: &str) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("Connection reset by peer"))
    }
}
