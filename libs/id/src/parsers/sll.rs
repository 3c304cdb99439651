//! SLL reserve numbers: `99CCYYNNNNNC`.
//!
//! No birth date is encoded beyond the year; month and day read as `01`.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_number, capture_text};
use crate::fields::{ParsedFields, Separator};
use crate::ParseError;

static SLL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^99([0-9]{2})([0-9]{2})([0-9]{5})([0-9])$").expect("SLL grammar is a valid regex")
});

/// Lowest birth year an SLL reserve number may carry, exclusive.
pub(crate) const MIN_YEAR_EXCLUSIVE: i32 = 1870;

pub(crate) fn parse(raw: &str) -> Result<ParsedFields, ParseError> {
    let caps = SLL
        .captures(raw)
        .ok_or_else(|| ParseError::malformed("not an SLL reserve number"))?;

    Ok(ParsedFields::new(
        capture_number(&caps, 1)?,
        capture_number(&caps, 2)?,
        1,
        1,
        Separator::Empty,
        capture_text(&caps, 3),
        capture_text(&caps, 4),
    ))
}

/// Digits the Luhn check runs over: century, year and serial.
pub(crate) fn checksum_digits(fields: &ParsedFields) -> String {
    format!("{:02}{:02}{}", fields.century, fields.year, fields.serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let fields = parse("992004920019").unwrap();
        assert_eq!(fields.full_year(), 2004);
        assert_eq!((fields.month(), fields.day()), (1, 1));
        assert_eq!(fields.serial(), "92001");
        assert_eq!(fields.check(), "9");
        assert_eq!(checksum_digits(&fields), "200492001");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse("982004920019").is_err());
        assert!(parse("99200492001").is_err());
        assert!(parse("99-2004920019").is_err());
    }
}
