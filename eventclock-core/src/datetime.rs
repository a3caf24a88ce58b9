//! Date input parsing and display formatting.
//!
//! Input follows the `datetime-local` form (`2025-03-20T15:00`) interpreted in
//! the user's timezone. Display follows the en-US long form, e.g.
//! "Thursday, March 20, 2025 at 03:00 PM".

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{EventClockError, EventClockResult};

/// Format used to pre-fill and read the date editor.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: &[&str] = &[
    INPUT_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const LONG_FORMAT: &str = "%A, %B %-d, %Y at %I:%M %p";
const SHORT_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

/// Parse a date typed by the user, in the local timezone.
pub fn parse_input(input: &str) -> EventClockResult<DateTime<Utc>> {
    parse_input_in(input, &Local)
}

/// Parse a date typed by the user, interpreting naive times in `tz`.
///
/// Accepts RFC 3339 (offset taken from the input), `YYYY-MM-DDTHH:MM[:SS]`,
/// the same with a space separator, and a bare `YYYY-MM-DD` (midnight).
pub fn parse_input_in<Tz: TimeZone>(input: &str, tz: &Tz) -> EventClockResult<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || EventClockError::InvalidDate(input.to_string());

    if input.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    // Times skipped by a DST transition do not exist locally
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// Render a date the way the editor expects it back, in the local timezone.
pub fn to_input(date: DateTime<Utc>) -> String {
    to_input_in(date, &Local)
}

pub fn to_input_in<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// Long form with weekday, e.g. "Thursday, March 20, 2025 at 03:00 PM".
pub fn format_long(date: DateTime<Utc>) -> String {
    format_long_in(date, &Local)
}

pub fn format_long_in<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(LONG_FORMAT).to_string()
}

/// Selector form without weekday, e.g. "March 20, 2025 at 03:00 PM".
pub fn format_short(date: DateTime<Utc>) -> String {
    format_short_in(date, &Local)
}

pub fn format_short_in<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(SHORT_FORMAT).to_string()
}
