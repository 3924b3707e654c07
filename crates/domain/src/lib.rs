mod date;
mod domain_list;
mod domain_record;
mod expiry;
mod notification;

pub use date::{format_date, is_valid_date, parse_date_to_timestamp_millis, MILLIS_PER_DAY};
pub use domain_list::{
    parse_domain_list, serialize_domain_list, DomainList, DomainListError, SkippedEntry,
};
pub use domain_record::{DomainLifetime, DomainRecord, DomainRecordError, Priority};
pub use expiry::{days_remaining, is_reminder_due, lifetime_progress_percentage};
pub use notification::{
    escape_markdown, NotificationConfig, ReminderMessage, TelegramCredentials,
    MARKDOWN_SPECIAL_CHARS,
};
