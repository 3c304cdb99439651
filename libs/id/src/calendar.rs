//! Calendar validation on the proleptic Gregorian calendar.
//!
//! Coordination numbers encode the day of month plus 60, so a day field in
//! `61..=91` is read as `day - 60` in coordination mode.

use chrono::{Datelike, NaiveDate};

/// Offset added to the day of month in coordination numbers.
pub const COORDINATION_DAY_OFFSET: u32 = 60;

/// Returns the date if `(year, month, day)` exists.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns the date encoded by a coordination-number day field.
#[must_use]
pub fn coordination_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(COORDINATION_DAY_OFFSET + 1..=COORDINATION_DAY_OFFSET + 31).contains(&day) {
        return None;
    }
    date(year, month, day - COORDINATION_DAY_OFFSET)
}

/// Validates a date with the day as given.
#[must_use]
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    date(year, month, day).is_some()
}

/// Validates a date with the day shifted back by 60.
#[must_use]
pub fn is_valid_coordination_date(year: i32, month: u32, day: u32) -> bool {
    coordination_date(year, month, day).is_some()
}

/// Divisible by 4, and not by 100 unless also by 400.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in a month, or `None` for a month outside `1..=12`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Whole years elapsed from `birth` to `today`.
///
/// Negative when `birth` lies in the future.
#[must_use]
pub fn whole_years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}
