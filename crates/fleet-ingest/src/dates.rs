//! Timestamp parsing for exports with inconsistent date conventions.
//!
//! The telemetry exports mix RFC 3339, space-separated datetimes, bare
//! dates, and slash dates in both day-first and month-first order. Slash
//! dates are disambiguated by component range where possible and default
//! to day-first otherwise, matching the fleet's regional convention.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the formats the source systems emit.
///
/// Naive values are taken as UTC. Bare dates resolve to midnight.
/// Returns `None` for empty or unparseable input.
pub fn parse_event_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
    }

    parse_slash_timestamp(trimmed)
}

/// `DD/MM/YYYY [HH:MM[:SS]]` or `MM/DD/YYYY [HH:MM[:SS]]`.
fn parse_slash_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let (date_part, time_part) = match raw.split_once(' ') {
        Some((date, time)) => (date, Some(time.trim())),
        None => (raw, None),
    };

    let mut components = date_part.split('/');
    let a: u32 = components.next()?.trim().parse().ok()?;
    let b: u32 = components.next()?.trim().parse().ok()?;
    let year_raw: i32 = components.next()?.trim().parse().ok()?;
    if components.next().is_some() {
        return None;
    }
    let year = if year_raw < 100 { year_raw + 2000 } else { year_raw };

    // A component over 12 can only be the day; otherwise assume day-first.
    let (day, month) = if a > 12 {
        (a, b)
    } else if b > 12 {
        (b, a)
    } else {
        (a, b)
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let (hour, minute, second) = match time_part {
        Some(time) if !time.is_empty() => parse_time(time)?,
        _ => (0, 0, 0),
    };
    let naive = date.and_hms_opt(hour, minute, second)?;
    Some(Utc.from_utc_datetime(&naive))
}

fn parse_time(raw: &str) -> Option<(u32, u32, u32)> {
    let mut fields = raw.split(':');
    let hour = fields.next()?.trim().parse().ok()?;
    let minute = fields.next()?.trim().parse().ok()?;
    let second = match fields.next() {
        Some(value) => value.trim().parse().ok()?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }
    Some((hour, minute, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect(raw: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) {
        let parsed = parse_event_timestamp(raw).unwrap_or_else(|| panic!("failed on {raw:?}"));
        assert_eq!(parsed, Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(), "for {raw:?}");
    }

    #[test]
    fn accepts_rfc3339() {
        expect("2025-06-01T08:30:00Z", 2025, 6, 1, 8, 30, 0);
        expect("2025-06-01T08:30:00+10:00", 2025, 5, 31, 22, 30, 0);
    }

    #[test]
    fn accepts_naive_datetimes_and_bare_dates() {
        expect("2025-06-01 08:30:00", 2025, 6, 1, 8, 30, 0);
        expect("2025-06-01 08:30", 2025, 6, 1, 8, 30, 0);
        expect("2025-06-01", 2025, 6, 1, 0, 0, 0);
    }

    #[test]
    fn slash_dates_default_to_day_first() {
        expect("03/04/2025", 2025, 4, 3, 0, 0, 0);
        expect("3/4/25 14:05", 2025, 4, 3, 14, 5, 0);
    }

    #[test]
    fn out_of_range_components_force_the_order() {
        // 13 cannot be a month, so this must be 13 April.
        expect("13/04/2025", 2025, 4, 13, 0, 0, 0);
        // And here 27 must be the day even though it appears second.
        expect("04/27/2025 09:00:30", 2025, 4, 27, 9, 0, 30);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_event_timestamp("").is_none());
        assert!(parse_event_timestamp("not a date").is_none());
        assert!(parse_event_timestamp("99/99/2025").is_none());
        assert!(parse_event_timestamp("2025-13-40").is_none());
    }
}
