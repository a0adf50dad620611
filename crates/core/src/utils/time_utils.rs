use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::DEFAULT_VALUATION_TZ_NAME;

/// Default timezone for valuation dates.
/// Accounts are held in CAD, so "today" follows Pacific time unless configured otherwise.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::America::Vancouver;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Use this whenever you need to derive a "business date" from a timestamp.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the given timezone.
pub fn valuation_date_today(tz: Tz) -> NaiveDate {
    valuation_date_from_utc(Utc::now(), tz)
}

/// Parses an IANA timezone name, e.g. `America/Toronto`.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Name of the default valuation timezone.
pub fn default_timezone_name() -> String {
    DEFAULT_VALUATION_TZ_NAME.to_string()
}

/// Whole days from `start` to `end`. Negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_between_forward_and_backward() {
        let jan_1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let mar_1 = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(days_between(jan_1, mar_1), 59);
        assert_eq!(days_between(mar_1, jan_1), -59);
        assert_eq!(days_between(jan_1, jan_1), 0);
    }

    #[test]
    fn test_days_between_crosses_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_between(start, end), 2);
    }

    #[test]
    fn test_valuation_date_from_utc_shifts_to_local_day() {
        // 03:00 UTC on Jan 2 is still Jan 1 in Vancouver
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        assert_eq!(
            valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            valuation_date_from_utc(instant, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("America/Toronto"), Some(chrono_tz::America::Toronto));
        assert_eq!(parse_timezone(" UTC "), Some(chrono_tz::UTC));
        assert_eq!(parse_timezone("Not/AZone"), None);
        assert_eq!(parse_timezone(&default_timezone_name()), Some(DEFAULT_VALUATION_TZ));
    }
}
