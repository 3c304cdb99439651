//! Century inference for short-form numbers.
//!
//! A short-form Swedish number carries only a two-digit year. The separator
//! tells whether the holder is under 100 (`-`) or has turned 100 (`+`).
//! Going the other way, a long-form number's explicit century determines
//! which separator its short form must use. The two directions agree for
//! every year [`has_short_form`] accepts: re-parsing the short form with the
//! inferred separator yields the same century.

use crate::fields::Separator;

/// Infers the century for a two-digit year.
///
/// The result is the century of the most recent year ending in `year` that
/// is not after `now_year` (or not after `now_year - 100` for `+`).
#[must_use]
pub fn infer_century(year: u8, separator: Separator, now_year: i32) -> u8 {
    let base = match separator {
        Separator::Plus => now_year - 100,
        Separator::Minus | Separator::Empty => now_year,
    };
    let full_year = base - (base - i32::from(year)).rem_euclid(100);
    full_year.div_euclid(100) as u8
}

/// Infers the short-form separator from an explicit birth year.
#[must_use]
pub fn infer_separator(full_year: i32, now_year: i32) -> Separator {
    if now_year - full_year < 100 {
        Separator::Minus
    } else {
        Separator::Plus
    }
}

/// Returns true if a number born in `full_year` has a short form that
/// re-parses to the same year: born no later than `now_year` and less than
/// 200 years before it.
#[must_use]
pub fn has_short_form(full_year: i32, now_year: i32) -> bool {
    (0..200).contains(&(now_year - full_year))
}
