//! Danish CPR numbers: `DDMMYY-SSSS` with the dash optional.
//!
//! No check digit is enforced; a number is accepted if its date exists and
//! falls within sane bounds relative to today.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::{capture_number, capture_text};
use crate::fields::{ParsedFields, Separator};
use crate::{calendar, ParseError, Scheme};

static DANISH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})-?([0-9]{4})$")
        .expect("Danish grammar is a valid regex")
});

/// Oldest plausible holder, in whole years.
pub(crate) const MAX_AGE: i32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DanishMatch {
    day: u8,
    month: u8,
    year: u8,
    sequence: String,
}

impl DanishMatch {
    /// Century from the first sequence digit and the two-digit year.
    pub(crate) fn century(&self) -> u8 {
        let digit = self.sequence.as_bytes()[0] - b'0';
        match (digit, self.year) {
            (0..=3, _) => 19,
            (4 | 9, ..=36) => 20,
            (4 | 9, _) => 19,
            (_, ..=57) => 18,
            _ => 20,
        }
    }

    /// Checks that the birth date exists, is at most a year ahead and is
    /// no more than [`MAX_AGE`] years back.
    pub(crate) fn birth_date(&self, today: NaiveDate) -> Result<NaiveDate, ParseError> {
        let full_year = i32::from(self.century()) * 100 + i32::from(self.year);
        let birth = calendar::date(full_year, u32::from(self.month), u32::from(self.day))
            .ok_or_else(|| {
                ParseError::date(Scheme::DanishCprNumber, "date does not exist")
            })?;

        if full_year > today.year() + 1 {
            return Err(ParseError::date(
                Scheme::DanishCprNumber,
                format!("birth year {full_year} is in the future"),
            ));
        }
        if calendar::whole_years_between(birth, today) > MAX_AGE {
            return Err(ParseError::date(
                Scheme::DanishCprNumber,
                format!("birth year {full_year} implies an age over {MAX_AGE}"),
            ));
        }

        Ok(birth)
    }

    /// Serial is the first three sequence digits; the last one is the old
    /// check digit, which still carries the sex.
    pub(crate) fn into_fields(self) -> ParsedFields {
        let century = self.century();
        let (serial, check) = self.sequence.split_at(3);
        ParsedFields::new(
            century,
            self.year,
            self.month,
            self.day,
            Separator::Minus,
            serial,
            check,
        )
    }
}

pub(crate) fn parse(raw: &str) -> Result<DanishMatch, ParseError> {
    let caps = DANISH
        .captures(raw)
        .ok_or_else(|| ParseError::malformed("not a Danish CPR number"))?;

    Ok(DanishMatch {
        day: capture_number(&caps, 1)?,
        month: capture_number(&caps, 2)?,
        year: capture_number(&caps, 3)?,
        sequence: capture_text(&caps, 4).to_owned(),
    })
}

/// Whether a string reads as a plausible Danish CPR number on `today`.
pub(crate) fn is_plausible_reading(raw: &str, today: NaiveDate) -> bool {
    parse(raw).is_ok_and(|found| found.birth_date(today).is_ok())
}
