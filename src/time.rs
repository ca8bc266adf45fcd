//! Human-facing time formatting: "time ago" labels and compact durations.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// Months and years are display approximations, not calendar math.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Relative-time label for `date` against the current instant.
#[must_use]
pub fn format_relative_time_to(date: DateTime<Utc>) -> String {
    format_relative_time(date, Utc::now())
}

/// Relative-time label for `date` against an explicit `now`.
///
/// Past dates get an `" ago"` suffix, future dates an `"in "` prefix, and an
/// elapsed time of exactly zero seconds is `"just now"`. Units cascade from
/// seconds to years, picking the smallest unit whose scaled value stays below
/// its carry threshold. Pluralization is a bare `s` when the magnitude
/// exceeds one; it is not locale-aware.
#[must_use]
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - date).num_seconds();
    if elapsed == 0 {
        return "just now".to_string();
    }

    let magnitude = elapsed.unsigned_abs() as i64;
    let (value, unit) = if magnitude < MINUTE {
        (magnitude, "second")
    } else if magnitude / MINUTE < 60 {
        (magnitude / MINUTE, "minute")
    } else if magnitude / HOUR < 24 {
        (magnitude / HOUR, "hour")
    } else if magnitude / DAY < 30 {
        (magnitude / DAY, "day")
    } else if magnitude / MONTH < 12 {
        (magnitude / MONTH, "month")
    } else {
        (magnitude / YEAR, "year")
    };

    let plural = if value > 1 { "s" } else { "" };
    if elapsed < 0 {
        format!("in {value} {unit}{plural}")
    } else {
        format!("{value} {unit}{plural} ago")
    }
}

/// Compact duration label for a second count, e.g. `"1h 4m 5s"`.
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }
    let hours = seconds / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{secs}s"));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-07T12:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_exactly_now_is_just_now() {
        assert_eq!(format_relative_time(now(), now()), "just now");
    }

    #[test]
    fn test_past_buckets() {
        let cases = [
            (Duration::seconds(1), "1 second ago"),
            (Duration::seconds(45), "45 seconds ago"),
            (Duration::seconds(90), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::minutes(61), "1 hour ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::hours(25), "1 day ago"),
            (Duration::days(29), "29 days ago"),
            (Duration::days(31), "1 month ago"),
            (Duration::days(70), "2 months ago"),
            (Duration::days(400), "1 year ago"),
        ];
        for (offset, expected) in cases {
            assert_eq!(
                format_relative_time(now() - offset, now()),
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_future_gets_in_prefix() {
        assert_eq!(
            format_relative_time(now() + Duration::days(2), now()),
            "in 2 days"
        );
        assert_eq!(
            format_relative_time(now() + Duration::seconds(30), now()),
            "in 30 seconds"
        );
    }

    #[test]
    fn test_singular_at_exactly_one() {
        assert_eq!(
            format_relative_time(now() - Duration::minutes(1), now()),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(now() + Duration::hours(1), now()),
            "in 1 hour"
        );
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(-5), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3845), "1h 4m 5s");
        assert_eq!(format_duration(7200), "2h 0m 0s");
    }
}
