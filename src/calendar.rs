//! Calendar arithmetic on `NaiveDate`
//!
//! Month and year steps clamp the day to the end of the target month:
//! Jan 31 + 1 month is Feb 28, and Feb 29 + 1 year is Feb 28 in a non-leap
//! year.

use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

use crate::error::{Result, TerminationError};

/// Rounding applied to a trailing partial year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRounding {
    /// Count only completed years (anniversary at or before the target)
    Floor,
    /// Count a started year as a full one (anniversary at or after the target)
    Ceiling,
}

/// Text that is not a `YYYY-MM-DD` calendar date
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date: {0} (expected format: YYYY-MM-DD)")]
pub struct InvalidDate(pub String);

/// Parse a strict `YYYY-MM-DD` date (four-digit year, two-digit month and day)
pub fn parse_date(text: &str) -> std::result::Result<NaiveDate, InvalidDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(InvalidDate(text.to_string()));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| InvalidDate(text.to_string()))
}

/// Advance `date` by whole months, clamping to the end of the target month
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or(TerminationError::DateOutOfRange { date, months })
}

/// Advance `date` by whole years, clamping Feb 29 to Feb 28 in non-leap years
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    add_months(date, years.saturating_mul(12))
}

/// Number of whole years between `from` and `to`
///
/// Works on calendar years rather than day counts, so 365/366-day years and
/// clamped Feb 29 anniversaries are handled exactly. Returns 0 when `to`
/// does not come after `from`.
pub fn years_elapsed(from: NaiveDate, to: NaiveDate, rounding: YearRounding) -> Result<u32> {
    if to <= from {
        return Ok(0);
    }

    // to > from, so the calendar-year difference is non-negative and
    // overshoots the completed years by at most one
    let mut years = (to.year() - from.year()) as u32;
    if add_years(from, years)? > to {
        years -= 1;
    }

    match rounding {
        YearRounding::Floor => Ok(years),
        YearRounding::Ceiling => {
            if add_years(from, years)? < to {
                Ok(years + 1)
            } else {
                Ok(years)
            }
        }
    }
}

/// Anniversary of `start` falling on or before `date`
pub fn anniversary_on_or_before(start: NaiveDate, date: NaiveDate) -> Result<NaiveDate> {
    add_years(start, years_elapsed(start, date, YearRounding::Floor)?)
}

/// Anniversary of `start` falling on or after `date`
pub fn anniversary_on_or_after(start: NaiveDate, date: NaiveDate) -> Result<NaiveDate> {
    add_years(start, years_elapsed(start, date, YearRounding::Ceiling)?)
}
