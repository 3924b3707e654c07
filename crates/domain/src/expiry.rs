use crate::date::MILLIS_PER_DAY;

/// Whole days left until `expires_at`, rounded up.
///
/// A domain expiring later today yields `1`, one that expires exactly now
/// or expired earlier today yields `0`, and past expiry dates yield
/// negative values.
pub fn days_remaining(expires_at: i64, now: i64) -> i64 {
    let diff = expires_at - now;
    let days = diff / MILLIS_PER_DAY;
    // Integer division truncates towards zero which already is the ceiling
    // for negative values
    if diff > 0 && diff % MILLIS_PER_DAY != 0 {
        days + 1
    } else {
        days
    }
}

/// A reminder is due while the domain has not expired yet and is at most
/// `lead_days` away from expiry. A non positive `lead_days` therefore never
/// makes any reminder due.
pub fn is_reminder_due(days_remaining: i64, lead_days: i64) -> bool {
    days_remaining > 0 && days_remaining <= lead_days
}

/// How much of the registration period has elapsed, in percent and clamped
/// to `0..=100`
pub fn lifetime_progress_percentage(registered_at: i64, expires_at: i64, now: i64) -> f64 {
    let total = (expires_at - registered_at) as f64;
    if total <= 0.0 {
        return 100.0;
    }
    let elapsed = (now - registered_at) as f64;
    (elapsed / total * 100.0).max(0.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-01T00:00:00Z
    const NEW_YEAR: i64 = 1735689600000;

    #[test]
    fn rounds_partial_days_up() {
        assert_eq!(days_remaining(NEW_YEAR + 4 * MILLIS_PER_DAY, NEW_YEAR), 4);
        assert_eq!(days_remaining(NEW_YEAR + 4 * MILLIS_PER_DAY, NEW_YEAR + 1), 4);
        assert_eq!(days_remaining(NEW_YEAR + 1, NEW_YEAR), 1);
        assert_eq!(days_remaining(NEW_YEAR, NEW_YEAR), 0);
        assert_eq!(days_remaining(NEW_YEAR, NEW_YEAR + 1000 * 60 * 60 * 10), 0);
        assert_eq!(days_remaining(NEW_YEAR, NEW_YEAR + MILLIS_PER_DAY), -1);
        assert_eq!(
            days_remaining(NEW_YEAR, NEW_YEAR + MILLIS_PER_DAY + MILLIS_PER_DAY / 2),
            -1
        );
    }

    #[test]
    fn reminder_is_due_inside_lead_time_only() {
        assert!(is_reminder_due(4, 7));
        assert!(is_reminder_due(7, 7));
        assert!(is_reminder_due(1, 1));
        assert!(!is_reminder_due(8, 7));
        assert!(!is_reminder_due(19, 7));
        assert!(!is_reminder_due(0, 7));
        assert!(!is_reminder_due(-3, 7));
    }

    #[test]
    fn non_positive_lead_time_never_reminds() {
        for days in -5..=5 {
            assert!(!is_reminder_due(days, 0));
            assert!(!is_reminder_due(days, -2));
        }
    }

    #[test]
    fn progress_is_clamped() {
        let registered = NEW_YEAR;
        let expires = NEW_YEAR + 100 * MILLIS_PER_DAY;
        assert_eq!(lifetime_progress_percentage(registered, expires, registered), 0.0);
        assert_eq!(
            lifetime_progress_percentage(registered, expires, registered + 25 * MILLIS_PER_DAY),
            25.0
        );
        assert_eq!(
            lifetime_progress_percentage(registered, expires, registered - MILLIS_PER_DAY),
            0.0
        );
        assert_eq!(
            lifetime_progress_percentage(registered, expires, expires + MILLIS_PER_DAY),
            100.0
        );
        assert_eq!(lifetime_progress_percentage(expires, registered, registered), 100.0);
    }
}
