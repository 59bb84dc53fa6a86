//! Publication date normalization.
//!
//! Feeds write dates in a handful of RFC-822 variants. Each raw value is
//! tried against a fixed, ordered list of patterns and re-emitted as a
//! fixed-width UTC timestamp so that string order equals time order.
//! Anything unparseable becomes "now", which sorts it to the top.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

/// Output format for every `pubDate`.
const ISO_UTC: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// Patterns tried in order before the RFC 2822 / RFC 3339 fallbacks.
/// They see the value with any leading weekday already removed.
const PATTERNS: &[&str] = &["%d %b %Y %H:%M:%S %z", "%d %b %Y %H:%M %z"];

/// Normalize `raw`, falling back to `now` when no pattern matches.
pub fn parse_pubdate_or(raw: &str, now: DateTime<Utc>) -> String {
    match parse_known(raw.trim()) {
        Some(dt) => format_utc(dt.with_timezone(&Utc)),
        None => {
            if !raw.trim().is_empty() {
                debug!(raw, "Unrecognised pubDate; using current time");
            }
            format_utc(now)
        }
    }
}

/// Render a timestamp the way every story stores it.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format(ISO_UTC).to_string()
}

fn parse_known(raw: &str) -> Option<DateTime<FixedOffset>> {
    if raw.is_empty() {
        return None;
    }
    let dated = strip_weekday(raw);
    PATTERNS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(dated, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc2822(dated).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
}

/// Drop a leading `Day, ` prefix. chrono rejects a weekday that disagrees
/// with the date, and feeds get it wrong often enough to matter.
fn strip_weekday(raw: &str) -> &str {
    match raw.split_once(',') {
        Some((day, rest)) if !day.is_empty() && day.chars().all(char::is_alphabetic) => {
            rest.trim_start()
        }
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_rfc822_with_seconds_converts_to_utc() {
        assert_eq!(
            parse_pubdate_or("Thu, 25 Sep 2025 18:34:38 +0530", fixed_now()),
            "2025-09-25T13:04:38+00:00"
        );
    }

    #[test]
    fn test_wrong_weekday_still_parses() {
        // 25 Sep 2025 was a Thursday
        assert_eq!(
            parse_pubdate_or("Mon, 25 Sep 2025 18:34:38 +0530", fixed_now()),
            "2025-09-25T13:04:38+00:00"
        );
        assert_eq!(
            parse_pubdate_or("Mon, 25 Sep 2025 10:00 +0530", fixed_now()),
            "2025-09-25T04:30:00+00:00"
        );
        assert_eq!(
            parse_pubdate_or("Mon, 25 Sep 2025 18:34:38 GMT", fixed_now()),
            "2025-09-25T18:34:38+00:00"
        );
    }

    #[test]
    fn test_strip_weekday_only_removes_a_leading_word() {
        assert_eq!(strip_weekday("Thu, 25 Sep 2025"), "25 Sep 2025");
        assert_eq!(strip_weekday("25 Sep 2025, late"), "25 Sep 2025, late");
        assert_eq!(strip_weekday("2025-09-25T18:34:38Z"), "2025-09-25T18:34:38Z");
    }

    #[test]
    fn test_rfc822_without_seconds() {
        assert_eq!(
            parse_pubdate_or("Thu, 25 Sep 2025 10:00 +0530", fixed_now()),
            "2025-09-25T04:30:00+00:00"
        );
    }

    #[test]
    fn test_day_month_year_variant() {
        assert_eq!(
            parse_pubdate_or("25 Sep 2025 18:34:38 +0000", fixed_now()),
            "2025-09-25T18:34:38+00:00"
        );
    }

    #[test]
    fn test_gmt_zone_name() {
        assert_eq!(
            parse_pubdate_or("Thu, 25 Sep 2025 18:34:38 GMT", fixed_now()),
            "2025-09-25T18:34:38+00:00"
        );
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(
            parse_pubdate_or("2025-09-25T18:34:38.250+05:30", fixed_now()),
            "2025-09-25T13:04:38+00:00"
        );
    }

    #[test]
    fn test_unparseable_falls_back_to_now() {
        assert_eq!(parse_pubdate_or("yesterday", fixed_now()), "2030-01-02T03:04:05+00:00");
        assert_eq!(parse_pubdate_or("", fixed_now()), "2030-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_output_is_fixed_width() {
        let now = parse_pubdate_or("garbage", Utc::now());
        assert_eq!(now.len(), "2025-09-25T13:04:38+00:00".len());
        assert!(now.ends_with("+00:00"));
    }

    #[test]
    fn test_string_order_matches_time_order() {
        let earlier = parse_pubdate_or("Thu, 25 Sep 2025 09:00:00 +0000", fixed_now());
        let later = parse_pubdate_or("Thu, 25 Sep 2025 10:00:00 +0000", fixed_now());
        assert!(later > earlier);
    }
}
