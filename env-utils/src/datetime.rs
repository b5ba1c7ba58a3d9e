//! Flexible date and date-time parsing.
//!
//! Accepts the formats people actually put in environment files: RFC 3339,
//! ISO 8601 with a space or `T` separator, date-only forms with `-`, `/` or
//! `.` separators, day-first and month-first orderings, compact `YYYYMMDD`,
//! and month names. Ambiguous numeric dates are read month-first.
//!
//! Years are four digits, or two digits in month/day/year and day/month/year
//! forms (`11/23/16`). Two-digit years 00-69 land in 2000-2069 and 70-99 in
//! 1970-1999. Years before 1000 are not accepted.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::error::DateParseError;

/// Result of a date-time coercion.
///
/// Keeps the UTC offset when the input carried one, and stays naive when it
/// did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvDateTime {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl EnvDateTime {
    /// Local wall-clock date and time, dropping any offset.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Aware(dt) => dt.naive_local(),
            Self::Naive(dt) => *dt,
        }
    }

    /// Calendar date, as written in the input.
    pub fn date(&self) -> NaiveDate {
        self.naive_local().date()
    }

    /// The UTC offset, if the input carried one.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Aware(dt) => Some(*dt.offset()),
            Self::Naive(_) => None,
        }
    }

    pub fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }
}

impl From<DateTime<FixedOffset>> for EnvDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Aware(value)
    }
}

impl From<NaiveDateTime> for EnvDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl fmt::Display for EnvDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aware(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y%m%dT%H%M%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    // Month-first before day-first so "01-02-2016" is January 2nd.
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    // Two-digit years, tried once every four-digit form has failed.
    "%m-%d-%y",
    "%d-%m-%y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%m.%d.%y",
    "%d.%m.%y",
];

/// Parse a date-time, keeping the offset if one is present.
///
/// Date-only inputs resolve to midnight.
pub fn parse_datetime(input: &str) -> Result<EnvDateTime, DateParseError> {
    let s = input.trim();
    let err = || DateParseError {
        input: input.to_string(),
        expected: "datetime",
    };
    if s.is_empty() {
        return Err(err());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(EnvDateTime::Aware(dt));
    }
    if let Some(dt) = AWARE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok().and_then(full_year))
    {
        return Ok(EnvDateTime::Aware(dt));
    }
    // chrono's %z does not accept a bare Z outside RFC 3339.
    if let Some(naive) = s.strip_suffix('Z').and_then(parse_naive_datetime) {
        return Ok(EnvDateTime::Aware(naive.and_utc().fixed_offset()));
    }
    if let Some(naive) = parse_naive_datetime(s) {
        return Ok(EnvDateTime::Naive(naive));
    }
    if let Some(date) = parse_naive_date(s) {
        return Ok(EnvDateTime::Naive(date.and_time(NaiveTime::MIN)));
    }
    Err(err())
}

/// Parse a calendar date.
///
/// Accepts anything [`parse_datetime`] accepts and discards the time of
/// day, keeping the date as written in the input.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let s = input.trim();
    if let Some(date) = parse_naive_date(s) {
        return Ok(date);
    }
    parse_datetime(input)
        .map(|dt| dt.date())
        .map_err(|_| DateParseError {
            input: input.to_string(),
            expected: "date",
        })
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok().and_then(full_year))
}

fn parse_naive_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok().and_then(full_year))
}

// chrono's %Y takes one to four digits, so "11/23/16" would otherwise match
// "%m/%d/%Y" as the year 16.
fn full_year<T: Datelike>(value: T) -> Option<T> {
    (value.year() >= 1000).then_some(value)
}
