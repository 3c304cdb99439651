//! Property tests: format/parse stability and validity consistency.

use nordid_id::century::has_short_form;
use nordid_id::checksum::{luhn, norwegian_check_digits};
use nordid_id::{FixedClock, IdentificationNumber, Options, Scheme};
use proptest::prelude::*;

fn clock() -> FixedClock {
    FixedClock::from_ymd(2024, 6, 15).unwrap()
}

fn parse(raw: &str, options: &Options) -> Result<IdentificationNumber, nordid_id::ParseError> {
    IdentificationNumber::parse_with_clock(raw, options, &clock())
}

/// Long-form Swedish numbers born in `years` with a correct check digit.
fn long_form(years: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = String> {
    (years, 1u32..=12, 1u32..=28, 1u32..=999).prop_map(|(year, month, day, serial)| {
        let digits = format!("{:02}{month:02}{day:02}{serial:03}", year % 100);
        format!("{}{digits}{}", year / 100, luhn(&digits))
    })
}

/// Long-form personal identity numbers that have a short form as of the
/// test clock.
fn personal_identity_number() -> impl Strategy<Value = String> {
    long_form(1825..=2024)
}

proptest! {
    #[test]
    fn prop_formats_reparse_to_same_value(raw in personal_identity_number()) {
        let options = Options::default();
        let number = parse(&raw, &options).unwrap();
        prop_assert_eq!(number.scheme(), Scheme::PersonalIdentityNumber);
        prop_assert_eq!(number.format_long(), raw.clone());

        let from_short = parse(&number.format_short(), &options).unwrap();
        prop_assert_eq!(&from_short, &number);
        let from_long = parse(&number.format_long(), &options).unwrap();
        prop_assert_eq!(&from_long, &number);
    }

    #[test]
    fn prop_long_form_accepted_only_with_short_form(raw in long_form(1700..=2199)) {
        let full_year: i32 = raw[..4].parse().unwrap();
        match parse(&raw, &Options::default()) {
            Ok(number) => {
                prop_assert!(has_short_form(full_year, 2024), "{} accepted", raw);
                let from_short = parse(&number.format_short(), &Options::default()).unwrap();
                prop_assert_eq!(from_short.full_year(), full_year);
            }
            Err(err) => {
                prop_assert!(!has_short_form(full_year, 2024), "{} rejected: {}", raw, err);
                prop_assert!(err.is_date_invalid(), "{}", err);
            }
        }
    }

    #[test]
    fn prop_single_digit_changes_are_rejected(
        raw in personal_identity_number(),
        position in 2usize..12,
        delta in 1u32..=9,
    ) {
        let mut digits: Vec<char> = raw.chars().collect();
        let old = digits[position].to_digit(10).unwrap();
        digits[position] = char::from_digit((old + delta) % 10, 10).unwrap();
        let mutated: String = digits.into_iter().collect();

        prop_assert!(parse(&mutated, &Options::swedish_only()).is_err(), "{} accepted", mutated);
    }

    #[test]
    fn prop_is_valid_matches_parse(raw in "[0-9TKMXR+ -]{0,14}") {
        let options = Options::default();
        prop_assert_eq!(
            IdentificationNumber::is_valid_with_clock(&raw, &options, &clock()),
            parse(&raw, &options).is_ok()
        );
    }

    #[test]
    fn prop_parse_never_panics(raw in "\\PC{0,20}") {
        let _ = parse(&raw, &Options::default());
    }

    #[test]
    fn prop_norwegian_numbers_round_trip(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 0u32..=99,
        individual in 0u32..=499,
    ) {
        let digits = format!("{day:02}{month:02}{year:02}{individual:03}");
        let checks = norwegian_check_digits(&digits);
        prop_assume!(checks.is_some());
        let (first, second) = checks.unwrap();
        let raw = format!("{digits}{first}{second}");

        let number = parse(&raw, &Options::default()).unwrap();
        prop_assert_eq!(number.scheme(), Scheme::NorwegianBirthNumber);
        prop_assert_eq!(number.full_year(), 1900 + year as i32);
        prop_assert_eq!(number.format_long(), raw);
    }
}
