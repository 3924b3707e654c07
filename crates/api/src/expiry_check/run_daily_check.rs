use crate::shared::usecase::UseCase;
use renewal_keeper_domain::{
    format_date, is_reminder_due, DomainRecord, NotificationConfig, ReminderMessage,
};
use renewal_keeper_infra::{DomainListRepoError, INotifier, KeeperContext, LastNotifiedRepo};
use tracing::{error, info, warn};

/// What a single pass over the domain list did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DailyCheckSummary {
    pub checked: usize,
    pub reminded: usize,
    pub already_notified: usize,
    /// Stored entries that are not records plus records whose expiration
    /// date can not be read
    pub invalid_records: usize,
}

/// Goes through `records` in order and sends a reminder for every record
/// that expires within the lead time and was not reminded about earlier
/// on the same UTC day.
///
/// `now` is read once by the caller so every record is compared against
/// the same instant. Marking a domain as notified happens before the next
/// record is looked at, so duplicated names are reminded about once.
pub async fn run_daily_check(
    now: i64,
    config: &NotificationConfig,
    records: &[DomainRecord],
    last_notified: &LastNotifiedRepo,
    notifier: &dyn INotifier,
) -> DailyCheckSummary {
    let today = format_date(now);
    let mut summary = DailyCheckSummary::default();

    for record in records {
        summary.checked += 1;

        let days_remaining = match record.days_remaining(now) {
            Ok(days) => days,
            Err(e) => {
                warn!("Skipping `{}` in the expiry check: {}", record.domain, e);
                summary.invalid_records += 1;
                continue;
            }
        };
        if !is_reminder_due(days_remaining, config.lead_days) {
            continue;
        }

        let notified_on = match last_notified.find(&record.domain).await {
            Ok(date) => date,
            Err(e) => {
                error!(
                    "Unable to read when `{}` was last notified, assuming never: {:?}",
                    record.domain, e
                );
                None
            }
        };
        if notified_on.as_deref() == Some(today.as_str()) {
            summary.already_notified += 1;
            continue;
        }

        let message =
            ReminderMessage::expiry_reminder(record, days_remaining, config.panel_url.as_deref());
        notifier.notify(config, &message).await;
        summary.reminded += 1;

        if let Err(e) = last_notified.save(&record.domain, &today).await {
            error!(
                "Unable to mark `{}` as notified on {}: {:?}",
                record.domain, today, e
            );
        }
    }

    summary
}

#[derive(Debug)]
pub enum UseCaseError {
    MalformedDomainList,
    StorageError,
}

/// The scheduled expiry check over the stored domain list
#[derive(Debug)]
pub struct RunDailyCheckUseCase {
    pub notification_config: NotificationConfig,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RunDailyCheckUseCase {
    type Response = DailyCheckSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "RunDailyCheck";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();

        let list = match ctx.repos.domains.load().await {
            Ok(list) => list,
            Err(DomainListRepoError::Malformed(e)) => {
                error!("The domain list can not be parsed: {}", e);
                ctx.notifier
                    .notify(
                        &self.notification_config,
                        &ReminderMessage::malformed_domain_list(),
                    )
                    .await;
                return Err(UseCaseError::MalformedDomainList);
            }
            Err(DomainListRepoError::Storage(e)) => {
                error!("Unable to load the domain list: {:?}", e);
                return Err(UseCaseError::StorageError);
            }
        };

        let mut summary = run_daily_check(
            now,
            &self.notification_config,
            &list.records,
            &ctx.repos.last_notified,
            ctx.notifier.as_ref(),
        )
        .await;
        summary.invalid_records += list.skipped.len();
        info!(
            "Expiry check done. Checked: {}, reminded: {}, already notified today: {}, invalid records: {}",
            summary.checked, summary.reminded, summary.already_notified, summary.invalid_records
        );

        Ok(summary)
    }
}
