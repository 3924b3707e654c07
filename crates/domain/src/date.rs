use chrono::prelude::*;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Parses a `YYYY-MM-DD` calendar date. Zero padding of month and day
/// is optional.
pub fn is_valid_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.trim().split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) if (1900..=9999).contains(&year) => {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
        }
        _ => Err(anyhow::Error::msg(datestr.to_string())),
    }
}

/// Timestamp in millis of a stored date.
///
/// Plain calendar dates resolve to midnight UTC. Full RFC 3339 timestamps
/// are accepted as well and keep their time of day.
pub fn parse_date_to_timestamp_millis(datestr: &str) -> anyhow::Result<i64> {
    if let Ok(date) = is_valid_date(datestr) {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))?;
        return Ok(Utc.from_utc_datetime(&midnight).timestamp_millis());
    }

    DateTime::parse_from_rfc3339(datestr.trim())
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| anyhow::Error::msg(datestr.to_string()))
}

/// The UTC calendar day of a timestamp, formatted as `YYYY-MM-DD`
pub fn format_date(timestamp_millis: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            " 2031-07-15 ",
        ];

        for date in &valid_dates {
            assert!(is_valid_date(date).is_ok(), "Expected {} to be valid", date);
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "",
            "2018--1-1",
            "2018-1-1-",
            "2018-13-1",
            "2018-0-1",
            "2019-2-29",
            "2020-4-31",
            "1800-1-1",
            "tomorrow",
            "2020/01/01",
        ];

        for date in &invalid_dates {
            assert!(is_valid_date(date).is_err(), "Expected {} to be invalid", date);
        }
    }

    #[test]
    fn plain_dates_resolve_to_midnight_utc() {
        // 2025-01-05T00:00:00Z
        assert_eq!(
            parse_date_to_timestamp_millis("2025-01-05").unwrap(),
            1736035200000
        );
        assert_eq!(
            parse_date_to_timestamp_millis("2025-01-05T12:00:00+00:00").unwrap(),
            1736035200000 + MILLIS_PER_DAY / 2
        );
        assert!(parse_date_to_timestamp_millis("05/01/2025").is_err());
    }

    #[test]
    fn it_formats_the_utc_day() {
        assert_eq!(format_date(1735689600000), "2025-01-01");
        assert_eq!(format_date(1735689600000 + MILLIS_PER_DAY - 1), "2025-01-01");
        assert_eq!(format_date(1735689600000 + MILLIS_PER_DAY), "2025-01-02");
    }
}
