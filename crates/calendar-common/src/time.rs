//! Date parsing and calendar arithmetic for widget rendering.
//!
//! All arithmetic works on local wall-clock dates. A requested date that
//! cannot be parsed becomes [`CalendarDate::Invalid`], which renders as
//! `NaN` in numeric fields instead of failing the request.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::fmt;

/// Date-time formats tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats; these denote local midnight of that day.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

/// Parse a `date` parameter into a local wall-clock timestamp.
///
/// Supports:
/// - RFC 3339: "2025-01-01T08:00:00+08:00" (converted to local time)
/// - RFC 3339 without seconds: "2025-01-01T08:00Z"
/// - Local date-time: "2025-01-01T08:00:00", "2025-01-01 08:00"
/// - Date only: "2025-01-01", "2025/01/01"
/// - Year-month and year: "2025-03", "2025" (first day of the period)
pub fn parse_date(s: &str) -> Result<NaiveDateTime, DateParseError> {
    let s = s.trim();

    let offset_datetime = DateTime::parse_from_rfc3339(s).ok().or_else(|| {
        with_zero_seconds(s).and_then(|full| DateTime::parse_from_rfc3339(&full).ok())
    });
    if let Some(dt) = offset_datetime {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ndt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date.and_time(NaiveTime::default()));
        }
    }

    if let Some(date) = parse_partial_date(s) {
        return Ok(date.and_time(NaiveTime::default()));
    }

    Err(DateParseError::InvalidFormat(s.to_string()))
}

/// Expand "YYYY-MM-DDTHH:MM<offset>" to "YYYY-MM-DDTHH:MM:00<offset>".
fn with_zero_seconds(s: &str) -> Option<String> {
    let (date, time) = s.split_once(['T', 't'])?;
    let hour_minute = time.get(..5)?;
    let offset = time.get(5..)?;

    let bytes = hour_minute.as_bytes();
    let is_hh_mm = bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !is_hh_mm || !offset.starts_with(['Z', 'z', '+', '-']) {
        return None;
    }

    Some(format!("{}T{}:00{}", date, hour_minute, offset))
}

/// "YYYY" or "YYYY-MM", anchored to the first day of that year or month.
fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 if s.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
        }
        7 if s.as_bytes()[4] == b'-' => {
            NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}

/// A resolved target date: either a concrete local timestamp or the
/// "invalid date" produced by an unparseable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDate {
    Valid(NaiveDateTime),
    Invalid,
}

impl CalendarDate {
    /// Resolve an optional raw date against the current time.
    ///
    /// `None` means "now"; a string that fails to parse yields `Invalid`.
    pub fn resolve(raw: Option<&str>, now: NaiveDateTime) -> Self {
        match raw {
            None => CalendarDate::Valid(now),
            Some(s) => match parse_date(s) {
                Ok(dt) => CalendarDate::Valid(dt),
                Err(e) => {
                    tracing::debug!(error = %e, "Rendering with invalid date");
                    CalendarDate::Invalid
                }
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CalendarDate::Valid(_))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarDate::Valid(dt) => Some(dt.date()),
            CalendarDate::Invalid => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date().map(|d| d.year())
    }

    /// Month number, 1-12.
    pub fn month(&self) -> Option<u32> {
        self.date().map(|d| d.month())
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> Option<u32> {
        self.date().map(|d| d.day())
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.date().map(|d| d.weekday())
    }

    /// Signed number of calendar days from `now` until this date.
    pub fn days_from(&self, now: NaiveDateTime) -> Option<i64> {
        self.date().map(|d| days_between(now.date(), d))
    }

    pub fn week_of_year(&self) -> Option<u32> {
        self.date().map(week_of_year)
    }
}

/// Signed whole-day difference `to - from`.
///
/// Both sides are already truncated to midnight, so the difference is an
/// exact number of days and rounding up changes nothing.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Week-of-year number as displayed on the week badge.
///
/// `ceil((days since Jan 1 + weekday of Jan 1 + 1) / 7)` where Sunday is 0.
/// This is not ISO-8601 numbering: weeks start on Sunday and Jan 1 always
/// falls in week 1.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let year_start = NaiveDate::from_yo_opt(date.year(), 1).unwrap_or(date);
    let days_passed = (date - year_start).num_days() as u32;
    let offset = year_start.weekday().num_days_from_sunday();
    (days_passed + offset + 1).div_ceil(7)
}

/// Displays the wrapped value, or `NaN` when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNaN<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrNaN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("NaN"),
        }
    }
}
