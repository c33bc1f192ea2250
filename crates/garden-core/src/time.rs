//! Lenient UTC timestamp parsing.
//!
//! Records arrive from storage with whatever ISO-8601 flavour the writer used:
//! RFC 3339 with `Z` or an offset, naive date-times (assumed UTC), or a bare
//! date from an unlock-date picker. Anything else parses to `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::SECONDS_PER_DAY;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp into a UTC instant.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days elapsed from `since` to `now`, floored (negative if `since` is
/// in the future).
pub fn age_days(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_seconds().div_euclid(SECONDS_PER_DAY)
}
