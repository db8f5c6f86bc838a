//! Calendar-date arithmetic on raw user input.

use chrono::{NaiveDate, TimeDelta};

/// Date format accepted and produced by this crate (ISO-8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date, `None` on any failure.
pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Shifts a date by a signed whole-day count, `None` when the result
/// falls outside the representable calendar range.
pub(crate) fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Returns the calendar date `days` whole days after `date`, as an
/// ISO-8601 string.
///
/// Fractional counts floor, matching day-boundary arithmetic from a
/// midnight base: `+1.5` lands on the next day, `-1.5` two days back.
///
/// Returns `None` (never panics) when `date` is not a calendar date,
/// `days` is not finite, or the shifted date is unrepresentable.
pub fn add_days(date: &str, days: f64) -> Option<String> {
    let start = parse_date(date)?;
    if !days.is_finite() {
        return None;
    }
    // The saturating f64-to-i64 cast is safe here: out-of-range counts
    // fail the checked add below.
    let shifted = shift(start, days.floor() as i64)?;
    Some(shifted.format(DATE_FORMAT).to_string())
}

/// Returns the signed whole-day difference `b - a`, or `None` if either
/// input is not a calendar date.
///
/// Calendar dates carry no time of day, so the difference is exact whole
/// days by construction.
pub fn diff_days(a: &str, b: &str) -> Option<i64> {
    let first = parse_date(a)?;
    let second = parse_date(b)?;
    Some(second.signed_duration_since(first).num_days())
}
