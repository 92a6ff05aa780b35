//! Greeting, timestamp and small arithmetic helpers printed by the build report.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::build_info::BuildInfo;

/// The fixed welcome line.
pub const GREETING: &str = "Hello World from Jenkins Multibranch Pipeline!";

/// `yyyy-MM-dd HH:mm:ss`, zero-padded, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the fixed greeting.
pub fn greeting() -> &'static str {
    GREETING
}

/// Reads the local wall clock and formats it with [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Formats an instant in its own time zone with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Adds two integers. Overflow wraps around.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns true if `n` is divisible by two. Works for negative numbers too.
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// Describes the toolchain this binary was built with, e.g.
/// `Running in: rustc 1.80.0 (051478957 2024-07-21)`.
pub fn environment_info() -> String {
    format!("Running in: {}", BuildInfo::default().runtime_version())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_greeting_is_exact() {
        assert_eq!(greeting(), "Hello World from Jenkins Multibranch Pipeline!");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(-7, -8), -15);
    }

    #[test]
    fn test_add_is_commutative() {
        let samples = [i32::MIN, -1000, -3, -1, 0, 1, 2, 42, 65_536, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
            }
        }
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(4));
        assert!(!is_even(7));
        assert!(is_even(-2));
        assert!(!is_even(-3));
        assert!(is_even(0));
        assert!(is_even(i32::MIN));
        assert!(!is_even(i32::MAX));
    }

    #[test]
    fn test_format_timestamp_zero_pads() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp(&instant), "2024-03-07 09:05:03");
    }

    #[test]
    fn test_format_timestamp_uses_24_hour_clock() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&instant), "2023-12-31 23:59:59");
    }

    #[test]
    fn test_format_timestamp_keeps_local_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let instant = offset.with_ymd_and_hms(2025, 1, 1, 0, 15, 0).unwrap();
        assert_eq!(format_timestamp(&instant), "2025-01-01 00:15:00");
    }

    #[test]
    fn test_current_timestamp_shape() {
        let pattern = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
        let ts = current_timestamp();
        assert!(pattern.is_match(&ts), "unexpected timestamp: {ts}");
    }

    #[test]
    fn test_environment_info_prefix() {
        let info = environment_info();
        assert!(info.starts_with("Running in: "));
        assert!(info.len() > "Running in: ".len());
    }
}
