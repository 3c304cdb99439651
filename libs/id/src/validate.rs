//! Resolution of a raw string into a validated number.
//!
//! The classifier picks a parser. For the Swedish family each sub-scheme is
//! tried in turn (plain, T-number, VGR, RVB) and the first that validates
//! wins. Within a scheme the checks run in a fixed order: grammar, checksum,
//! date, then options, so a disabled scheme is only reported for a number
//! that is otherwise valid.

use chrono::{Datelike, NaiveDate};

use crate::checksum::{luhn, norwegian_check_digits};
use crate::classify::{classify, Candidate};
use crate::fields::ParsedFields;
use crate::parsers::swedish::FamilyMatch;
use crate::parsers::{danish, norwegian, sll, swedish};
use crate::{calendar, century, IdentificationNumber, Options, ParseError, Scheme};

type FamilyStep = fn(&FamilyMatch, &Options, i32) -> Result<IdentificationNumber, ParseError>;

/// Swedish family sub-schemes in the order they are attempted.
const FAMILY_STEPS: [(Scheme, FamilyStep); 4] = [
    (Scheme::PersonalIdentityNumber, plain),
    (Scheme::TNumber, t_number),
    (Scheme::VgrReserveNumber, vgr_reserve_number),
    (Scheme::RvbReserveNumber, rvb_reserve_number),
];

pub(crate) fn resolve(
    raw: &str,
    options: &Options,
    today: NaiveDate,
) -> Result<IdentificationNumber, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::malformed("empty input"));
    }

    let candidate = classify(raw, options, today);
    tracing::debug!(?candidate, "classified input");

    match candidate {
        Candidate::DanishCpr => danish_cpr_number(raw, today),
        Candidate::NorwegianBirthNumber => norwegian_birth_number(raw),
        Candidate::SllReserveNumber => sll_reserve_number(raw, today),
        Candidate::SwedishFamily => swedish_family(raw, options, today.year()),
    }
}

fn swedish_family(
    raw: &str,
    options: &Options,
    now_year: i32,
) -> Result<IdentificationNumber, ParseError> {
    let found = swedish::parse(raw)?;

    let mut best: Option<ParseError> = None;
    for (scheme, step) in FAMILY_STEPS {
        match step(&found, options, now_year) {
            Ok(number) => {
                tracing::debug!(%scheme, "scheme matched");
                return Ok(number);
            }
            Err(err) => {
                tracing::debug!(%scheme, error = %err, "scheme rejected");
                // a later disabled scheme is the more specific one
                let replaces = best.as_ref().map_or(true, |b| {
                    err.rank() > b.rank() || (err.is_scheme_disabled() && b.is_scheme_disabled())
                });
                if replaces {
                    best = Some(err);
                }
            }
        }
    }

    Err(best.unwrap_or_else(|| ParseError::malformed("no scheme matched")))
}

fn plain(
    found: &FamilyMatch,
    options: &Options,
    now_year: i32,
) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::PersonalIdentityNumber;
    let reserve = found.reserve();
    if let Some(letter) = reserve.filter(|r| !r.is_interim()) {
        return Err(ParseError::malformed(format!(
            "'{letter}' is not an interim number letter"
        )));
    }
    if found.has_unassigned_serial() {
        return Err(ParseError::malformed("serial number 000 is never assigned"));
    }

    let fields = found.fields('1', now_year);
    verify_luhn(scheme, &fields.date_serial_digits(), fields.check())?;

    let (year, month, day) = ymd(&fields);
    let coordination = if calendar::is_valid_date(year, month, day) {
        false
    } else if calendar::is_valid_coordination_date(year, month, day) {
        true
    } else {
        return Err(ParseError::date(scheme, "date does not exist"));
    };
    verify_short_form(scheme, &fields, now_year)?;

    if reserve.is_some() {
        gate(options.allow_interim_number, scheme, "allowInterimNumber")?;
    }
    if coordination {
        gate(options.allow_coordination_number, scheme, "allowCoordinationNumber")?;
    } else {
        gate(
            options.allow_personal_identity_number,
            scheme,
            "allowPersonalIdentityNumber",
        )?;
    }

    Ok(IdentificationNumber::new(scheme, fields, reserve))
}

fn t_number(
    found: &FamilyMatch,
    options: &Options,
    now_year: i32,
) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::TNumber;
    let reserve = found
        .reserve()
        .ok_or_else(|| ParseError::malformed("a T-number needs a reserve letter"))?;

    let fields = found.fields('1', now_year);
    verify_luhn(scheme, &fields.date_serial_digits(), fields.check())?;
    verify_direct_date(scheme, &fields)?;
    verify_short_form(scheme, &fields, now_year)?;
    gate(options.allow_t_number, scheme, "allowTNumber")?;

    Ok(IdentificationNumber::new(scheme, fields, Some(reserve)))
}

fn vgr_reserve_number(
    found: &FamilyMatch,
    options: &Options,
    now_year: i32,
) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::VgrReserveNumber;
    let reserve = found
        .reserve()
        .ok_or_else(|| ParseError::malformed("a VGR reserve number needs a reserve letter"))?;
    let substitute = match reserve.letter() {
        'K' => '5',
        'M' => '7',
        'X' => '8',
        other => {
            return Err(ParseError::malformed(format!(
                "'{other}' is not a VGR reserve letter"
            )))
        }
    };

    let fields = found.fields(substitute, now_year);
    verify_luhn(scheme, &fields.date_serial_digits(), fields.check())?;

    let tail = found.serial_tail();
    let value: u8 = tail
        .parse()
        .map_err(|_| ParseError::malformed("serial is not numeric"))?;
    let unknown_sex = (80..=89).contains(&value);
    let (fits, expected) = match reserve.letter() {
        'K' => (!unknown_sex && value % 2 == 0, "an even number outside 80-89"),
        'M' => (!unknown_sex && value % 2 == 1, "an odd number outside 80-89"),
        _ => (unknown_sex, "a number in 80-89"),
    };
    if !fits {
        return Err(ParseError::ChecksumMismatch {
            scheme,
            expected: expected.to_owned(),
            actual: tail.to_owned(),
        });
    }

    verify_direct_date(scheme, &fields)?;
    verify_short_form(scheme, &fields, now_year)?;
    gate(options.allow_vgr_reserve_number, scheme, "allowVgrReserveNumber")?;

    Ok(IdentificationNumber::new(scheme, fields, Some(reserve)))
}

fn rvb_reserve_number(
    found: &FamilyMatch,
    options: &Options,
    now_year: i32,
) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::RvbReserveNumber;
    let reserve = found
        .reserve()
        .ok_or_else(|| ParseError::malformed("an RVB reserve number needs a reserve letter"))?;

    let fields = found.fields('1', now_year);
    let (allowed, expected): (&[char], &str) = if fields.full_year() < 2000 {
        (&['6', '9'], "6 or 9")
    } else {
        (&['2'], "2")
    };
    let digit = found.serial_tail().chars().next().unwrap_or_default();
    if !allowed.contains(&digit) {
        return Err(ParseError::ChecksumMismatch {
            scheme,
            expected: expected.to_owned(),
            actual: digit.to_string(),
        });
    }

    verify_direct_date(scheme, &fields)?;
    verify_short_form(scheme, &fields, now_year)?;
    gate(options.allow_rvb_reserve_number, scheme, "allowRvbReserveNumber")?;

    Ok(IdentificationNumber::new(scheme, fields, Some(reserve)))
}

fn sll_reserve_number(raw: &str, today: NaiveDate) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::SllReserveNumber;
    let fields = sll::parse(raw)?;
    verify_luhn(scheme, &sll::checksum_digits(&fields), fields.check())?;

    let full_year = fields.full_year();
    if full_year <= sll::MIN_YEAR_EXCLUSIVE || full_year > today.year() + 1 {
        return Err(ParseError::date(
            scheme,
            format!(
                "year {full_year} outside {}..={}",
                sll::MIN_YEAR_EXCLUSIVE + 1,
                today.year() + 1
            ),
        ));
    }

    Ok(IdentificationNumber::new(scheme, fields, None))
}

fn norwegian_birth_number(raw: &str) -> Result<IdentificationNumber, ParseError> {
    let scheme = Scheme::NorwegianBirthNumber;
    let found = norwegian::parse(raw)?;

    match norwegian_check_digits(&found.digits()) {
        Some((first, second)) if format!("{first}{second}") == found.check => {}
        Some((first, second)) => {
            return Err(ParseError::ChecksumMismatch {
                scheme,
                expected: format!("{first}{second}"),
                actual: found.check.clone(),
            })
        }
        None => {
            return Err(ParseError::ChecksumMismatch {
                scheme,
                expected: "none (check value would be 10)".to_owned(),
                actual: found.check.clone(),
            })
        }
    }

    let century = found.century().ok_or_else(|| {
        ParseError::date(scheme, "individual number and year do not determine a century")
    })?;
    let fields = found.into_fields(century);
    verify_direct_date(scheme, &fields)?;

    Ok(IdentificationNumber::new(scheme, fields, None))
}

fn danish_cpr_number(raw: &str, today: NaiveDate) -> Result<IdentificationNumber, ParseError> {
    let found = danish::parse(raw)?;
    found.birth_date(today)?;
    Ok(IdentificationNumber::new(
        Scheme::DanishCprNumber,
        found.into_fields(),
        None,
    ))
}

fn verify_luhn(scheme: Scheme, digits: &str, check: &str) -> Result<(), ParseError> {
    let expected = luhn(digits).to_string();
    if expected == check {
        Ok(())
    } else {
        Err(ParseError::ChecksumMismatch {
            scheme,
            expected,
            actual: check.to_owned(),
        })
    }
}

fn verify_direct_date(scheme: Scheme, fields: &ParsedFields) -> Result<(), ParseError> {
    let (year, month, day) = ymd(fields);
    if calendar::is_valid_date(year, month, day) {
        Ok(())
    } else {
        Err(ParseError::date(scheme, "date does not exist"))
    }
}

/// Rejects a long-form birth year whose short form would name another year.
fn verify_short_form(
    scheme: Scheme,
    fields: &ParsedFields,
    now_year: i32,
) -> Result<(), ParseError> {
    let full_year = fields.full_year();
    if century::has_short_form(full_year, now_year) {
        Ok(())
    } else {
        Err(ParseError::date(
            scheme,
            format!("year {full_year} has no short form in {now_year}"),
        ))
    }
}

fn gate(allowed: bool, scheme: Scheme, option: &'static str) -> Result<(), ParseError> {
    if allowed {
        Ok(())
    } else {
        Err(ParseError::SchemeDisabled { scheme, option })
    }
}

fn ymd(fields: &ParsedFields) -> (i32, u32, u32) {
    (
        fields.full_year(),
        u32::from(fields.month()),
        u32::from(fields.day()),
    )
}
