//! Norwegian birth numbers: `DDMMYYIIICC`.
//!
//! `III` is the individual number, `CC` the two mod-11 check digits. The
//! century is not written down; it follows from the individual number and
//! the two-digit year.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_number, capture_text};
use crate::fields::{ParsedFields, Separator};
use crate::ParseError;

static NORWEGIAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{3})([0-9]{2})$")
        .expect("Norwegian grammar is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NorwegianMatch {
    pub(crate) day: u8,
    pub(crate) month: u8,
    pub(crate) year: u8,
    pub(crate) individual: String,
    pub(crate) check: String,
}

impl NorwegianMatch {
    /// The nine digits the first check digit covers.
    pub(crate) fn digits(&self) -> String {
        format!(
            "{:02}{:02}{:02}{}",
            self.day, self.month, self.year, self.individual
        )
    }

    /// Century from the individual number range, if the range determines one.
    pub(crate) fn century(&self) -> Option<u8> {
        let individual: u16 = self.individual.parse().ok()?;
        century_for(individual, self.year)
    }

    pub(crate) fn into_fields(self, century: u8) -> ParsedFields {
        ParsedFields::new(
            century,
            self.year,
            self.month,
            self.day,
            Separator::Empty,
            self.individual,
            self.check,
        )
    }
}

fn century_for(individual: u16, year: u8) -> Option<u8> {
    match (individual, year) {
        (0..=499, _) => Some(19),
        (500..=749, 54..) => Some(18),
        (900.., 40..) => Some(19),
        (_, ..=39) => Some(20),
        _ => None,
    }
}

pub(crate) fn parse(raw: &str) -> Result<NorwegianMatch, ParseError> {
    let caps = NORWEGIAN
        .captures(raw)
        .ok_or_else(|| ParseError::malformed("not a Norwegian birth number"))?;

    Ok(NorwegianMatch {
        day: capture_number(&caps, 1)?,
        month: capture_number(&caps, 2)?,
        year: capture_number(&caps, 3)?,
        individual: capture_text(&caps, 4).to_owned(),
        check: capture_text(&caps, 5).to_owned(),
    })
}
