//! Day arithmetic against UTC midnight.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::MILLIS_PER_DAY;

/// Start of the given calendar date as a UTC instant.
///
/// Dates without a time component are interpreted at UTC midnight, which is
/// how the data service stores due dates and target dates.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

/// Whole days from `now` until `date`, rounded up.
///
/// A partially elapsed day still counts as one remaining day, so a date later
/// today yields `1` and a date that passed this morning yields `0`. Negative
/// results are days overdue.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let millis = (start_of_day_utc(date) - now).num_milliseconds();
    ceil_div(millis, MILLIS_PER_DAY)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Parses a date that may carry a time suffix (`2025-03-01T00:00:00Z`).
pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    let date_part = date_part.split(' ').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
