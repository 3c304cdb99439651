//! The validated identification number value.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendar::{self, COORDINATION_DAY_OFFSET};
use crate::fields::{ParsedFields, ReserveCharacter, Separator};
use crate::macros::scheme_predicates;
use crate::{validate, Clock, Options, ParseError, Scheme, SystemClock};

/// Legal sex as encoded in the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    fn from_digit(digit: Option<u32>) -> Option<Self> {
        digit.map(|d| if d % 2 == 1 { Sex::Male } else { Sex::Female })
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

/// A number that passed validation under exactly one [`Scheme`].
///
/// Values are immutable. Construct them with [`IdentificationNumber::parse`]
/// or one of its variants; formatting a value and parsing the result again
/// yields an equal value.
///
/// ```
/// use nordid_id::{FixedClock, IdentificationNumber, Options, Scheme};
///
/// let clock = FixedClock::from_ymd(2024, 6, 15).unwrap();
/// let number =
///     IdentificationNumber::parse_with_clock("6403273813", &Options::default(), &clock)
///         .unwrap();
///
/// assert_eq!(number.scheme(), Scheme::PersonalIdentityNumber);
/// assert_eq!(number.format_short(), "640327-3813");
/// assert_eq!(number.format_long(), "196403273813");
/// assert_eq!(number.age(&clock), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationNumber {
    scheme: Scheme,
    fields: ParsedFields,
    reserve_character: Option<ReserveCharacter>,
}

impl IdentificationNumber {
    pub(crate) fn new(
        scheme: Scheme,
        fields: ParsedFields,
        reserve_character: Option<ReserveCharacter>,
    ) -> Self {
        Self {
            scheme,
            fields,
            reserve_character,
        }
    }

    /// Parses and validates `raw` against the system clock.
    pub fn parse(raw: &str, options: &Options) -> Result<Self, ParseError> {
        Self::parse_with_clock(raw, options, &SystemClock)
    }

    /// Parses and validates `raw`, reading "now" from `clock`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse_with_clock<C: Clock + ?Sized>(
        raw: &str,
        options: &Options,
        clock: &C,
    ) -> Result<Self, ParseError> {
        validate::resolve(raw, options, clock.today())
    }

    /// Parses a JSON value: a string, or a non-negative integer read as its
    /// decimal digits. Anything else is a [`ParseError::TypeMismatch`].
    pub fn parse_value(value: &Value, options: &Options) -> Result<Self, ParseError> {
        Self::parse_value_with_clock(value, options, &SystemClock)
    }

    pub fn parse_value_with_clock<C: Clock + ?Sized>(
        value: &Value,
        options: &Options,
        clock: &C,
    ) -> Result<Self, ParseError> {
        match value {
            Value::String(raw) => Self::parse_with_clock(raw, options, clock),
            Value::Number(number) => match number.as_u64() {
                Some(digits) => Self::parse_with_clock(&digits.to_string(), options, clock),
                None => Err(ParseError::TypeMismatch {
                    found: "non-integer or negative number",
                }),
            },
            Value::Null => Err(ParseError::TypeMismatch { found: "null" }),
            Value::Bool(_) => Err(ParseError::TypeMismatch { found: "boolean" }),
            Value::Array(_) => Err(ParseError::TypeMismatch { found: "array" }),
            Value::Object(_) => Err(ParseError::TypeMismatch { found: "object" }),
        }
    }

    /// Returns true if `raw` parses under `options`. Never fails.
    #[must_use]
    pub fn is_valid(raw: &str, options: &Options) -> bool {
        Self::parse(raw, options).is_ok()
    }

    #[must_use]
    pub fn is_valid_with_clock<C: Clock + ?Sized>(
        raw: &str,
        options: &Options,
        clock: &C,
    ) -> bool {
        Self::parse_with_clock(raw, options, clock).is_ok()
    }

    /// Canonical rendering, long or short.
    #[must_use]
    pub fn format(&self, long: bool) -> String {
        if long {
            self.format_long()
        } else {
            self.format_short()
        }
    }

    /// `YYMMDD-NNNC` for Swedish numbers, `DDMMYY-NNNN` for Danish ones.
    /// Norwegian and SLL numbers have a single form.
    #[must_use]
    pub fn format_short(&self) -> String {
        let f = &self.fields;
        let serial = self.display_serial();
        match self.scheme {
            Scheme::SllReserveNumber | Scheme::NorwegianBirthNumber => self.format_long(),
            Scheme::DanishCprNumber => {
                format!("{:02}{:02}{:02}-{serial}{}", f.day, f.month, f.year, f.check)
            }
            _ => format!(
                "{:02}{:02}{:02}{}{serial}{}",
                f.year, f.month, f.day, f.separator, f.check
            ),
        }
    }

    /// `CCYYMMDDNNNC` for Swedish numbers, `DDMMYYNNNN` for Danish ones.
    #[must_use]
    pub fn format_long(&self) -> String {
        let f = &self.fields;
        let serial = self.display_serial();
        match self.scheme {
            Scheme::SllReserveNumber => {
                format!("99{:02}{:02}{serial}{}", f.century, f.year, f.check)
            }
            Scheme::NorwegianBirthNumber | Scheme::DanishCprNumber => {
                format!("{:02}{:02}{:02}{serial}{}", f.day, f.month, f.year, f.check)
            }
            _ => format!(
                "{:02}{:02}{:02}{:02}{serial}{}",
                f.century, f.year, f.month, f.day, f.check
            ),
        }
    }

    /// Serial with the reserve letter restored in its first position.
    fn display_serial(&self) -> String {
        match self.reserve_character {
            Some(letter) => format!("{letter}{}", &self.fields.serial[1..]),
            None => self.fields.serial.clone(),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn fields(&self) -> &ParsedFields {
        &self.fields
    }

    #[must_use]
    pub fn century(&self) -> u8 {
        self.fields.century
    }

    #[must_use]
    pub fn full_year(&self) -> i32 {
        self.fields.full_year()
    }

    #[must_use]
    pub fn month(&self) -> u8 {
        self.fields.month
    }

    /// The day field as written, 61–91 for coordination numbers.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.fields.day
    }

    /// The day of month, with the coordination offset removed.
    #[must_use]
    pub fn real_day(&self) -> u8 {
        if self.is_coordination_number() {
            self.fields.day - COORDINATION_DAY_OFFSET as u8
        } else {
            self.fields.day
        }
    }

    /// Serial digits. A reserve letter appears as the digit it was checked
    /// with; see [`Self::reserve_character`].
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.fields.serial
    }

    #[must_use]
    pub fn check_digits(&self) -> &str {
        &self.fields.check
    }

    #[must_use]
    pub fn separator(&self) -> Separator {
        self.fields.separator
    }

    #[must_use]
    pub fn reserve_character(&self) -> Option<ReserveCharacter> {
        self.reserve_character
    }

    /// Birth date, or `None` for SLL reserve numbers which encode only a
    /// year.
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        if self.is_sll_reserve_number() {
            return None;
        }
        calendar::date(
            self.full_year(),
            u32::from(self.month()),
            u32::from(self.real_day()),
        )
    }

    /// Whole years from birth to the clock's today, negative for future
    /// birth dates. SLL reserve numbers report `-1`.
    #[must_use]
    pub fn age<C: Clock + ?Sized>(&self, clock: &C) -> i32 {
        self.birth_date()
            .map_or(-1, |birth| calendar::whole_years_between(birth, clock.today()))
    }

    #[must_use]
    pub fn age_now(&self) -> i32 {
        self.age(&SystemClock)
    }

    /// Sex from the parity of the last serial digit (the check digit for
    /// Danish numbers). VGR `X` numbers have none.
    #[must_use]
    pub fn sex(&self) -> Option<Sex> {
        let unknown_marker = self.reserve_character.is_some_and(|r| r.letter() == 'X');
        if self.is_vgr_reserve_number() && unknown_marker {
            return None;
        }
        let source = if self.is_danish_cpr_number() {
            &self.fields.check
        } else {
            &self.fields.serial
        };
        Sex::from_digit(source.chars().last().and_then(|c| c.to_digit(10)))
    }

    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex() == Some(Sex::Male)
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        self.sex() == Some(Sex::Female)
    }

    /// A personal identity number whose day field carries the +60 offset.
    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.scheme == Scheme::PersonalIdentityNumber
            && u32::from(self.fields.day) > COORDINATION_DAY_OFFSET
    }

    /// A personal identity number with a letter in its serial.
    #[must_use]
    pub fn is_interim_number(&self) -> bool {
        self.scheme == Scheme::PersonalIdentityNumber && self.reserve_character.is_some()
    }

    /// An ordinary personal identity number: not a coordination number.
    #[must_use]
    pub fn is_personal_identity_number(&self) -> bool {
        self.scheme == Scheme::PersonalIdentityNumber && !self.is_coordination_number()
    }

    #[must_use]
    pub fn is_reserve_number(&self) -> bool {
        self.scheme.is_reserve()
    }

    scheme_predicates! {
        is_t_number => TNumber,
        is_vgr_reserve_number => VgrReserveNumber,
        is_sll_reserve_number => SllReserveNumber,
        is_rvb_reserve_number => RvbReserveNumber,
        is_norwegian_birth_number => NorwegianBirthNumber,
        /// Danish CPR numbers are never checksum-validated.
        is_danish_cpr_number => DanishCprNumber,
    }
}

impl fmt::Display for IdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

impl FromStr for IdentificationNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::from_ymd(2024, 6, 15).unwrap()
    }

    fn parse(raw: &str) -> IdentificationNumber {
        IdentificationNumber::parse_with_clock(raw, &Options::default(), &clock()).unwrap()
    }

    #[test]
    fn test_formats_personal_identity_number() {
        let number = parse("19130401+2931");
        assert_eq!(number.format_short(), "130401+2931");
        assert_eq!(number.format_long(), "191304012931");
        assert_eq!(number.to_string(), "130401+2931");
        assert_eq!(number.format(true), number.format_long());
    }

    #[test]
    fn test_formats_restore_reserve_letter() {
        let number = parse("20121212M714");
        assert_eq!(number.format_short(), "121212-M714");
        assert_eq!(number.format_long(), "20121212M714");
        assert_eq!(number.serial(), "771");
        assert_eq!(number.reserve_character().map(|r| r.letter()), Some('M'));
    }

    #[test]
    fn test_formats_other_schemes() {
        let sll = parse("992004920019");
        assert_eq!(sll.format_short(), "992004920019");
        assert_eq!(sll.format_long(), "992004920019");

        let norwegian = parse("03016213704");
        assert_eq!(norwegian.format_short(), "03016213704");
        assert_eq!(norwegian.format_long(), "03016213704");

        let danish = parse("0101901234");
        assert_eq!(danish.format_short(), "010190-1234");
        assert_eq!(danish.format_long(), "0101901234");
    }

    #[test]
    fn test_coordination_number_accessors() {
        let number = parse("701063-2391");
        assert!(number.is_coordination_number());
        assert!(!number.is_personal_identity_number());
        assert_eq!(number.day(), 63);
        assert_eq!(number.real_day(), 3);
        assert_eq!(number.birth_date(), NaiveDate::from_ymd_opt(1970, 10, 3));
        assert_eq!(number.age(&clock()), 53);
    }

    #[test]
    fn test_sex() {
        assert!(parse("640883-3231").is_male());
        assert!(parse("640883-3223").is_female());
        assert!(parse("20121212K064").is_female());

        let unknown = parse("20121212X803");
        assert_eq!(unknown.sex(), None);
        assert!(!unknown.is_male());
        assert!(!unknown.is_female());

        // the check digit decides for CPR numbers
        assert_eq!(parse("010190-1234").sex(), Some(Sex::Female));
        assert_eq!(parse("010120-4567").sex(), Some(Sex::Male));
    }

    #[test]
    fn test_sll_has_no_birth_date() {
        let number = parse("992004920019");
        assert_eq!(number.birth_date(), None);
        assert_eq!(number.age(&clock()), -1);
    }

    #[test]
    fn test_predicates() {
        assert!(parse("19900101-T015").is_t_number());
        assert!(parse("19900101-T015").is_reserve_number());
        assert!(parse("20121212M714").is_vgr_reserve_number());
        assert!(parse("19850101-R635").is_rvb_reserve_number());
        assert!(parse("992004920019").is_sll_reserve_number());
        assert!(parse("03016213704").is_norwegian_birth_number());
        assert!(parse("010190-1234").is_danish_cpr_number());
        assert!(parse("6403273813").is_personal_identity_number());
        assert!(!parse("6403273813").is_reserve_number());
    }

    #[test]
    fn test_parse_value() {
        let options = Options::default();
        let from_int =
            IdentificationNumber::parse_value_with_clock(&6403273813_u64.into(), &options, &clock())
                .unwrap();
        assert_eq!(from_int, parse("640327-3813"));

        let from_str = IdentificationNumber::parse_value_with_clock(
            &Value::from("640327-3813"),
            &options,
            &clock(),
        )
        .unwrap();
        assert_eq!(from_str, from_int);

        for value in [Value::Null, Value::Bool(true), serde_json::json!([1]), serde_json::json!(-1)] {
            let err =
                IdentificationNumber::parse_value_with_clock(&value, &options, &clock()).unwrap_err();
            assert!(err.is_type_mismatch(), "{value}");
        }
    }

    #[test]
    fn test_from_str_uses_defaults() {
        let number: IdentificationNumber = "6403273813".parse().unwrap();
        assert_eq!(number.format_long(), "196403273813");
        assert!("not a number".parse::<IdentificationNumber>().is_err());
    }
}
