use crate::{expiry_check::RunDailyCheckUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval, sleep};
use renewal_keeper_infra::KeeperContext;
use std::time::Duration;

const SECS_PER_DAY: u64 = 60 * 60 * 24;

/// Seconds from `now_ts` until the clock next reads `run_at_hour_utc`:00
/// UTC. Zero when that is exactly now.
pub fn get_start_delay(now_ts: i64, run_at_hour_utc: u32) -> u64 {
    let secs_into_day = (now_ts / 1000).rem_euclid(SECS_PER_DAY as i64) as u64;
    let run_at = u64::from(run_at_hour_utc) * 60 * 60;
    if secs_into_day <= run_at {
        run_at - secs_into_day
    } else {
        SECS_PER_DAY - secs_into_day + run_at
    }
}

pub fn start_daily_check_job(ctx: KeeperContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now, ctx.config.daily_check_hour_utc);
        sleep(Duration::from_secs(secs_to_next_run)).await;

        let mut daily_interval = interval(Duration::from_secs(SECS_PER_DAY));
        loop {
            daily_interval.tick().await;

            // Channel settings come from the startup config
            let usecase = RunDailyCheckUseCase {
                notification_config: ctx.config.notification_config(),
            };
            let _ = execute(usecase, &ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-01T00:00:00Z
    const NEW_YEAR: i64 = 1735689600000;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(NEW_YEAR, 0), 0);
        assert_eq!(get_start_delay(NEW_YEAR, 6), 6 * 60 * 60);
        assert_eq!(get_start_delay(NEW_YEAR + 1000, 0), SECS_PER_DAY - 1);
        assert_eq!(get_start_delay(NEW_YEAR + 7 * 60 * 60 * 1000, 6), 23 * 60 * 60);
        assert_eq!(get_start_delay(NEW_YEAR + 5 * 60 * 60 * 1000, 6), 60 * 60);
        assert_eq!(get_start_delay(NEW_YEAR - 1000, 0), 1);
        assert_eq!(get_start_delay(NEW_YEAR + 1500, 23), 23 * 60 * 60 - 1);
    }
}
