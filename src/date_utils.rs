use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Naive layouts accepted in addition to RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string resolved both to the calendar day it names and to a
/// comparable instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    /// Day as written, in the value's own offset.
    pub day: NaiveDate,
    /// UTC instant for offset-aware values, wall time otherwise.
    pub instant: NaiveDateTime,
}

pub fn parse_date(s: &str) -> Option<ParsedDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(ParsedDate {
            day: dt.date_naive(),
            instant: dt.naive_utc(),
        });
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ParsedDate {
                day: dt.date(),
                instant: dt,
            });
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .map(|day| ParsedDate {
            day,
            instant: day.and_time(NaiveTime::default()),
        })
}

/// Calendar day named by a date string, time of day dropped.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    parse_date(s).map(|d| d.day)
}

/// Comparable timestamp; unparsable input sorts as the earliest possible value.
pub fn timestamp_or_min(s: Option<&str>) -> NaiveDateTime {
    s.and_then(parse_date)
        .map(|d| d.instant)
        .unwrap_or(NaiveDateTime::MIN)
}
