use renewal_keeper_domain::{NotificationConfig, TelegramCredentials};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Title of the dashboard
    pub site_name: String,
    /// Port for the application to run on
    pub port: usize,
    /// Chat id the chat-bot sends reminders to
    pub telegram_chat_id: Option<String>,
    pub telegram_bot_token: Option<String>,
    /// Base url of the chat-bot API, the bot token and method are appended
    pub telegram_api_base: String,
    pub wx_push_token: Option<String>,
    /// Endpoint of the push webhook
    pub wx_push_url: String,
    /// How many days before expiry reminders start. Values below one
    /// disable reminders entirely.
    pub lead_days: i64,
    /// Dashboard link included in reminders
    pub panel_url: Option<String>,
    /// UTC hour at which the daily expiry check runs
    pub daily_check_hour_utc: u32,
    /// Lifetime of a dashboard session in seconds
    pub session_ttl_secs: u64,
    /// Password stored at startup when none has been set yet
    pub bootstrap_password: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source. Empty values count as
    /// absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let port = parse_or_default(var("PORT"), "PORT", 5000);
        let lead_days = parse_or_default(
            var("DAYS"),
            "DAYS",
            NotificationConfig::DEFAULT_LEAD_DAYS,
        );
        let mut daily_check_hour_utc =
            parse_or_default(var("DAILY_CHECK_HOUR_UTC"), "DAILY_CHECK_HOUR_UTC", 0);
        if daily_check_hour_utc > 23 {
            warn!(
                "The given DAILY_CHECK_HOUR_UTC: {} is not an hour of the day, falling back to 0.",
                daily_check_hour_utc
            );
            daily_check_hour_utc = 0;
        }
        if lead_days < 1 {
            warn!(
                "DAYS is set to {}, no expiry reminders will ever be sent.",
                lead_days
            );
        }

        Self {
            site_name: var("SITENAME").unwrap_or_else(|| "Renewal Keeper".into()),
            port,
            telegram_chat_id: var("TGID"),
            telegram_bot_token: var("TGTOKEN"),
            telegram_api_base: var("TELEGRAM_API_BASE")
                .unwrap_or_else(|| "https://api.telegram.org".into()),
            wx_push_token: var("WX_PUSH_TOKEN"),
            wx_push_url: var("WX_PUSH_URL")
                .unwrap_or_else(|| "https://push.corex.ggff.net/wxsend".into()),
            lead_days,
            panel_url: var("PANEL_URL"),
            daily_check_hour_utc,
            session_ttl_secs: 60 * 10,
            bootstrap_password: var("PASSWORD"),
        }
    }

    /// The notification settings for a single expiry check
    pub fn notification_config(&self) -> NotificationConfig {
        let telegram = match (&self.telegram_chat_id, &self.telegram_bot_token) {
            (Some(chat_id), Some(bot_token)) => Some(TelegramCredentials {
                chat_id: chat_id.clone(),
                bot_token: bot_token.clone(),
            }),
            _ => None,
        };
        NotificationConfig {
            telegram,
            wx_push_token: self.wx_push_token.clone(),
            lead_days: self.lead_days,
            panel_url: self.panel_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_default<T>(val: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match val {
        None => default,
        Some(val) => match val.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, val, default
                );
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn it_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.site_name, "Renewal Keeper");
        assert_eq!(config.port, 5000);
        assert_eq!(config.lead_days, 7);
        assert_eq!(config.daily_check_hour_utc, 0);
        assert_eq!(config.session_ttl_secs, 600);
        assert_eq!(config.notification_config(), NotificationConfig::default());
    }

    #[test]
    fn it_reads_the_notification_settings() {
        let config = config_from(&[
            ("TGID", "12345"),
            ("TGTOKEN", "bot-token"),
            ("WX_PUSH_TOKEN", "wx-token"),
            ("DAYS", "30"),
            ("PANEL_URL", "https://panel.example.org"),
        ]);
        let notification_config = config.notification_config();
        assert_eq!(
            notification_config.telegram,
            Some(TelegramCredentials {
                chat_id: "12345".into(),
                bot_token: "bot-token".into()
            })
        );
        assert_eq!(notification_config.wx_push_token, Some("wx-token".into()));
        assert_eq!(notification_config.lead_days, 30);
        assert_eq!(
            notification_config.panel_url,
            Some("https://panel.example.org".into())
        );
    }

    #[test]
    fn incomplete_or_empty_credentials_disable_channels() {
        let config = config_from(&[("TGID", "12345"), ("TGTOKEN", ""), ("WX_PUSH_TOKEN", "  ")]);
        let notification_config = config.notification_config();
        assert!(notification_config.telegram.is_none());
        assert!(notification_config.wx_push_token.is_none());
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("DAYS", "a week"),
            ("PORT", "-1"),
            ("DAILY_CHECK_HOUR_UTC", "25"),
        ]);
        assert_eq!(config.lead_days, 7);
        assert_eq!(config.port, 5000);
        assert_eq!(config.daily_check_hour_utc, 0);
    }

    #[test]
    fn non_positive_lead_time_is_kept() {
        assert_eq!(config_from(&[("DAYS", "0")]).lead_days, 0);
        assert_eq!(config_from(&[("DAYS", "-3")]).lead_days, -3);
    }
}
