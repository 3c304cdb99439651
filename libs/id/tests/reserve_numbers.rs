//! T-numbers and the regional reserve numbers (VGR, SLL, RVB).

use nordid_id::{FixedClock, IdentificationNumber, Options, ParseError, Scheme, Sex};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::from_ymd(2024, 6, 15).unwrap()
}

fn parse(raw: &str, clock: &FixedClock) -> Result<IdentificationNumber, ParseError> {
    IdentificationNumber::parse_with_clock(raw, &Options::default(), clock)
}

#[rstest]
#[case("19900101-T015", "900101-T015", "19900101T015")]
#[case("900101T015", "900101-T015", "19900101T015")]
#[case("000101-T014", "000101-T014", "20000101T014")]
fn test_t_numbers(
    clock: FixedClock,
    #[case] raw: &str,
    #[case] short: &str,
    #[case] long: &str,
) {
    let number = parse(raw, &clock).unwrap();
    assert_eq!(number.scheme(), Scheme::TNumber);
    assert!(number.is_t_number());
    assert!(number.is_reserve_number());
    assert_eq!(number.reserve_character().map(|r| r.letter()), Some('T'));
    assert_eq!(number.format_short(), short);
    assert_eq!(number.format_long(), long);
}

#[rstest]
fn test_lowercase_letter_is_canonicalized(clock: FixedClock) {
    let number = parse("19900101-t015", &clock).unwrap();
    assert_eq!(number.format_long(), "19900101T015");
}

#[rstest]
#[case("19900101-T016")]
#[case("19900101-T010")]
fn test_t_number_checksum_mismatch(clock: FixedClock, #[case] raw: &str) {
    let err = parse(raw, &clock).unwrap_err();
    assert!(err.is_checksum_mismatch(), "{raw}: {err}");
}

#[rstest]
#[case("1990010-1T015")]
#[case("19900101-0T15")]
#[case("19900101-A015")]
#[case("19900101-TT15")]
fn test_misplaced_letter_is_malformed(clock: FixedClock, #[case] raw: &str) {
    let err = parse(raw, &clock).unwrap_err();
    assert!(err.is_malformed(), "{raw}: {err}");
}

#[rstest]
#[case("20121212M714", Some(Sex::Male))]
#[case("20121212K064", Some(Sex::Female))]
#[case("20121212X803", None)]
fn test_vgr_reserve_numbers(clock: FixedClock, #[case] raw: &str, #[case] sex: Option<Sex>) {
    let number = parse(raw, &clock).unwrap();
    assert_eq!(number.scheme(), Scheme::VgrReserveNumber);
    assert!(number.is_vgr_reserve_number());
    assert!(number.is_reserve_number());
    assert_eq!(number.sex(), sex);
    assert_eq!(number.is_male(), sex == Some(Sex::Male));
    assert_eq!(number.is_female(), sex == Some(Sex::Female));
    assert_eq!(number.format_long(), raw);
    assert_eq!(number.age(&clock), 11);
}

#[rstest]
fn test_vgr_checksum_mismatch(clock: FixedClock) {
    let err = parse("20121212K065", &clock).unwrap_err();
    assert!(err.is_checksum_mismatch(), "{err}");
}

#[rstest]
fn test_vgr_can_be_disabled(clock: FixedClock) {
    let options = Options {
        allow_vgr_reserve_number: false,
        ..Options::default()
    };
    let err =
        IdentificationNumber::parse_with_clock("20121212M714", &options, &clock).unwrap_err();
    assert_eq!(
        err,
        ParseError::SchemeDisabled {
            scheme: Scheme::VgrReserveNumber,
            option: "allowVgrReserveNumber",
        }
    );
}

#[rstest]
#[case("19850101-R635", 1985)]
#[case("20100101-R227", 2010)]
fn test_rvb_reserve_numbers(clock: FixedClock, #[case] raw: &str, #[case] year: i32) {
    let number = parse(raw, &clock).unwrap();
    assert_eq!(number.scheme(), Scheme::RvbReserveNumber);
    assert!(number.is_rvb_reserve_number());
    assert!(number.is_reserve_number());
    assert_eq!(number.full_year(), year);
    assert_eq!(number.format_long(), raw.replace('-', ""));
}

#[rstest]
#[case("19850101-R235")]
#[case("20100101-R627")]
fn test_rvb_digit_rule(clock: FixedClock, #[case] raw: &str) {
    let err = parse(raw, &clock).unwrap_err();
    assert!(err.is_checksum_mismatch(), "{raw}: {err}");
}

#[rstest]
fn test_sll_reserve_number(clock: FixedClock) {
    let number = parse("992004920019", &clock).unwrap();
    assert_eq!(number.scheme(), Scheme::SllReserveNumber);
    assert!(number.is_sll_reserve_number());
    assert!(number.is_reserve_number());
    assert_eq!(number.full_year(), 2004);
    assert_eq!((number.month(), number.day()), (1, 1));
    assert_eq!(number.birth_date(), None);
    assert_eq!(number.age(&clock), -1);
    assert_eq!(number.format_short(), "992004920019");
    assert_eq!(number.format_long(), "992004920019");
}

#[rstest]
#[case("992025920014", true)]
#[case("991871920011", true)]
#[case("992026920013", false)]
#[case("991865920019", false)]
fn test_sll_year_bounds(clock: FixedClock, #[case] raw: &str, #[case] valid: bool) {
    match parse(raw, &clock) {
        Ok(number) => assert!(valid, "{raw} accepted as {}", number.scheme()),
        Err(err) => {
            assert!(!valid, "{raw}: {err}");
            assert!(err.is_date_invalid(), "{raw}: {err}");
        }
    }
}

#[rstest]
fn test_sll_checksum(clock: FixedClock) {
    let err = parse("992004920018", &clock).unwrap_err();
    assert!(!err.is_scheme_disabled());
    assert!(!IdentificationNumber::is_valid_with_clock(
        "992004920018",
        &Options::default(),
        &clock
    ));
}
