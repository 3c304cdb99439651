//! Grammar of the Swedish personal identity number family.
//!
//! `[CC]YYMMDD[sep]NNNC` where `sep` is `-`, `+`, a space or nothing. The
//! first serial position may hold a reserve letter; T-numbers, VGR and RVB
//! reserve numbers and interim numbers all share this shape.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_number, capture_text};
use crate::century::{infer_century, infer_separator};
use crate::checksum::luhn;
use crate::fields::{ParsedFields, ReserveCharacter, Separator};
use crate::{calendar, ParseError};

static FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})?([0-9]{2})([0-9]{2})([0-9]{2})([-+ ]?)([0-9]{3})([0-9])$")
        .expect("family grammar is a valid regex")
});

const SEPARATORS: [char; 3] = ['-', '+', ' '];

/// Placeholder put where the reserve letter was, before substitution.
const PLACEHOLDER: char = '0';

/// A number matched against the family grammar, before any scheme has
/// substituted its digit for the reserve letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FamilyMatch {
    century: Option<u8>,
    year: u8,
    month: u8,
    day: u8,
    separator: Separator,
    serial: String,
    check: String,
    reserve: Option<ReserveCharacter>,
}

impl FamilyMatch {
    pub(crate) fn reserve(&self) -> Option<ReserveCharacter> {
        self.reserve
    }

    /// The two serial digits following the first position.
    pub(crate) fn serial_tail(&self) -> &str {
        &self.serial[1..]
    }

    /// Serial `000` is never assigned.
    pub(crate) fn has_unassigned_serial(&self) -> bool {
        self.reserve.is_none() && self.serial == "000"
    }

    /// Resolves century and separator against `now_year` and fills in the
    /// serial, replacing a reserve letter with `substitute`.
    ///
    /// An explicit century fixes the separator; an implicit one is inferred
    /// from the separator as typed.
    pub(crate) fn fields(&self, substitute: char, now_year: i32) -> ParsedFields {
        let serial = match self.reserve {
            Some(_) => format!("{substitute}{}", self.serial_tail()),
            None => self.serial.clone(),
        };
        let (century, separator) = match self.century {
            Some(century) => {
                let full_year = i32::from(century) * 100 + i32::from(self.year);
                (century, infer_separator(full_year, now_year))
            }
            None => (
                infer_century(self.year, self.separator, now_year),
                self.separator,
            ),
        };

        ParsedFields::new(
            century,
            self.year,
            self.month,
            self.day,
            separator,
            serial,
            self.check.clone(),
        )
    }
}

/// Separates a reserve letter from the input without touching the input.
///
/// Returns a copy with the letter replaced by a placeholder digit, and the
/// letter itself. The letter must sit in the first serial position: index 6
/// of a 10-character number or index 8 of a 12-character number, counted
/// with separators removed.
pub(crate) fn split_reserve_letter(
    raw: &str,
) -> Result<(String, Option<ReserveCharacter>), ParseError> {
    let mut letters = raw.char_indices().filter(|(_, c)| c.is_ascii_alphabetic());
    let Some((index, letter)) = letters.next() else {
        return Ok((raw.to_owned(), None));
    };
    if letters.next().is_some() {
        return Err(ParseError::malformed("more than one letter"));
    }

    let is_content = |c: &char| !SEPARATORS.contains(c);
    let compact_len = raw.chars().filter(is_content).count();
    let position = raw[..index].chars().filter(is_content).count();
    let expected = match compact_len {
        10 => 6,
        12 => 8,
        _ => {
            return Err(ParseError::malformed(
                "a reserve letter needs a 10 or 12 character number",
            ))
        }
    };
    if position != expected {
        return Err(ParseError::malformed(format!(
            "letter at position {} must be at position {}",
            position + 1,
            expected + 1
        )));
    }

    let reserve = ReserveCharacter::new(letter)
        .ok_or_else(|| ParseError::malformed(format!("'{letter}' is not a reserve letter")))?;

    let mut text = String::with_capacity(raw.len());
    text.push_str(&raw[..index]);
    text.push(PLACEHOLDER);
    text.push_str(&raw[index + letter.len_utf8()..]);

    Ok((text, Some(reserve)))
}

/// Matches the family grammar.
pub(crate) fn parse(raw: &str) -> Result<FamilyMatch, ParseError> {
    let (text, reserve) = split_reserve_letter(raw)?;
    let caps = FAMILY
        .captures(&text)
        .ok_or_else(|| ParseError::malformed("not a Swedish personal identity number"))?;

    let century = match caps.get(1) {
        Some(_) => Some(capture_number(&caps, 1)?),
        None => None,
    };
    let separator = Separator::from_typed(capture_text(&caps, 5))
        .ok_or_else(|| ParseError::malformed("unknown separator"))?;

    Ok(FamilyMatch {
        century,
        year: capture_number(&caps, 2)?,
        month: capture_number(&caps, 3)?,
        day: capture_number(&caps, 4)?,
        separator,
        serial: capture_text(&caps, 6).to_owned(),
        check: capture_text(&caps, 7).to_owned(),
        reserve,
    })
}

/// Whether a string reads as a valid ordinary personal identity number or
/// coordination number, regardless of options.
///
/// Used to weigh a Swedish reading against a Danish one.
pub(crate) fn is_plausible_reading(raw: &str, now_year: i32) -> bool {
    let Ok(found) = parse(raw) else {
        return false;
    };
    if found.reserve.is_some() || found.has_unassigned_serial() {
        return false;
    }

    let fields = found.fields(PLACEHOLDER, now_year);
    if luhn(&fields.date_serial_digits()).to_string() != fields.check() {
        return false;
    }

    let (year, month, day) = (
        fields.full_year(),
        u32::from(fields.month()),
        u32::from(fields.day()),
    );
    calendar::is_valid_date(year, month, day)
        || calendar::is_valid_coordination_date(year, month, day)
}
