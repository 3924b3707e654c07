use chrono::Utc;
use renewal_keeper_domain::format_date;

/// Clock used by the expiry checks and the dashboard. Tests swap it for a
/// fixed point in time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current UTC calendar day as `YYYY-MM-DD`
    fn today(&self) -> String {
        format_date(self.get_timestamp_millis())
    }
}

/// Reads the real time and is used outside of tests
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that never moves
pub struct StaticSys {
    pub timestamp_millis: i64,
}
impl ISys for StaticSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_the_utc_day() {
        // 2025-01-01T23:59:59Z
        let sys = StaticSys {
            timestamp_millis: 1735775999000,
        };
        assert_eq!(sys.today(), "2025-01-01");
    }
}
