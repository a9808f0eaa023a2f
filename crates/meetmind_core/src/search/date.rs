//! Calendar date parsing for free-form meeting dates.
//!
//! Stored dates are not normalized, so several shapes are accepted. Anything
//! else is reported as unparsable and handled explicitly by the filter.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date-only shapes, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Text could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized calendar date `{}`", self.input)
    }
}

impl Error for DateParseError {}

/// Parses `text` as a calendar date.
///
/// Accepts ISO dates, ISO date-times (the date part is kept as written, no
/// timezone shift), slash forms and English month-name forms such as
/// `Feb 18, 2026` or `18 February 2026`.
pub fn parse_calendar_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = text.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(date_time.date());
        }
    }

    Err(DateParseError {
        input: trimmed.to_string(),
    })
}
