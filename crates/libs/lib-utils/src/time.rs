//! # Time Utilities
//!
//! Display formatting for backend timestamps. Absent values render as `-`.

use chrono::{Duration, NaiveDateTime};

/// Default pattern, `2024-05-01 08:30:00`.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PLACEHOLDER: &str = "-";

/// Format a timestamp with a `chrono` strftime pattern.
pub fn format_date_time(moment: Option<NaiveDateTime>, pattern: &str) -> String {
    match moment {
        Some(moment) => moment.format(pattern).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Date part only, `2024-05-01`.
pub fn format_date(moment: Option<NaiveDateTime>) -> String {
    format_date_time(moment, "%Y-%m-%d")
}

/// Time-of-day part only, `08:30:00`.
pub fn format_clock(moment: Option<NaiveDateTime>) -> String {
    format_date_time(moment, "%H:%M:%S")
}

/// Human relative description of `moment` seen from `now` ("3 minutes ago", "in 2 days").
pub fn from_now(moment: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(moment) = moment else {
        return PLACEHOLDER.to_string();
    };

    let delta = now.signed_duration_since(moment);
    let phrase = relative_phrase(delta.abs());

    if delta < Duration::zero() {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(delta: Duration) -> String {
    let seconds = delta.num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;
    let hours = (seconds as f64 / 3600.0).round() as i64;
    let days = (seconds as f64 / 86_400.0).round() as i64;

    match seconds {
        s if s < 45 => "a few seconds".to_string(),
        s if s < 90 => "a minute".to_string(),
        _ if minutes < 45 => format!("{minutes} minutes"),
        _ if minutes < 90 => "an hour".to_string(),
        _ if hours < 22 => format!("{hours} hours"),
        _ if hours < 36 => "a day".to_string(),
        _ if days < 26 => format!("{days} days"),
        _ if days < 46 => "a month".to_string(),
        _ if days < 320 => format!("{} months", (days as f64 / 30.4).round() as i64),
        _ if days < 548 => "a year".to_string(),
        _ => format!("{} years", (days as f64 / 365.0).round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_format_helpers() {
        let moment = Some(at(8, 30, 5));

        assert_eq!(format_date_time(moment, DEFAULT_DATE_TIME_FORMAT), "2024-05-01 08:30:05");
        assert_eq!(format_date(moment), "2024-05-01");
        assert_eq!(format_clock(moment), "08:30:05");
    }

    #[test]
    fn test_absent_values_render_placeholder() {
        assert_eq!(format_date(None), "-");
        assert_eq!(from_now(None, at(0, 0, 0)), "-");
    }

    #[test]
    fn test_from_now_buckets() {
        let now = at(12, 0, 0);

        assert_eq!(from_now(Some(at(11, 59, 30)), now), "a few seconds ago");
        assert_eq!(from_now(Some(at(11, 57, 0)), now), "3 minutes ago");
        assert_eq!(from_now(Some(at(10, 0, 0)), now), "2 hours ago");
        assert_eq!(from_now(Some(at(13, 0, 0)), now), "in an hour");
        assert_eq!(
            from_now(Some(now - Duration::days(3)), now),
            "3 days ago"
        );
        assert_eq!(
            from_now(Some(now - Duration::days(400)), now),
            "a year ago"
        );
    }
}
