use crate::domain_record::DomainRecord;

/// Characters that carry meaning in the chat-bot markup
pub const MARKDOWN_SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Prefixes every markup character in `text` with a single backslash
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Credentials for the chat-bot channel
#[derive(Debug, Clone, PartialEq)]
pub struct TelegramCredentials {
    pub chat_id: String,
    pub bot_token: String,
}

/// Everything a single expiry check needs to know about where and when to
/// send reminders. A channel without credentials is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub telegram: Option<TelegramCredentials>,
    pub wx_push_token: Option<String>,
    /// Number of days before expiry during which reminders are sent
    pub lead_days: i64,
    /// Dashboard link appended to every reminder
    pub panel_url: Option<String>,
}

impl NotificationConfig {
    pub const DEFAULT_LEAD_DAYS: i64 = 7;
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            telegram: None,
            wx_push_token: None,
            lead_days: Self::DEFAULT_LEAD_DAYS,
            panel_url: None,
        }
    }
}

/// A notification rendered for both channels.
///
/// `rich` is sent to the chat-bot which understands a markup subset, so
/// user provided fields are escaped. `plain` carries the same content
/// verbatim for the push webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderMessage {
    pub title: String,
    pub rich: String,
    pub plain: String,
}

impl ReminderMessage {
    pub fn expiry_reminder(
        record: &DomainRecord,
        days_remaining: i64,
        panel_url: Option<&str>,
    ) -> Self {
        let lines = |domain: &str, system: &str| {
            let mut lines = vec![
                "[Domain expiry reminder]".to_string(),
                String::new(),
                format!("Domain: {}", domain),
                format!(
                    "Time left: {} days (expires on {})",
                    days_remaining, record.expiration_date
                ),
                format!("Registrar: {}", system),
                format!("Registrar URL: {}", record.system_url),
            ];
            if let Some(url) = panel_url {
                lines.push(format!("Renewal panel: {}", url));
            }
            lines.join("\n")
        };

        Self {
            title: "Domain expiry reminder".into(),
            rich: lines(
                &escape_markdown(&record.domain),
                &escape_markdown(&record.system),
            ),
            plain: lines(&record.domain, &record.system),
        }
    }

    /// Sent when the stored domain list cannot be read at all
    pub fn malformed_domain_list() -> Self {
        let text = "The domain list stored in the key-value store is not valid JSON";
        Self {
            title: "Domain monitor error".into(),
            rich: text.into(),
            plain: text.into(),
        }
    }
}
