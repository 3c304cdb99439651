//! Picks which scheme family a raw string should be parsed as.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::parsers::{danish, swedish};
use crate::Options;

/// The parser a raw string is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Candidate {
    DanishCpr,
    NorwegianBirthNumber,
    SllReserveNumber,
    /// Personal identity, coordination, interim, T, VGR and RVB numbers.
    /// The sub-scheme is settled during validation.
    SwedishFamily,
}

/// Classifies `raw` by shape, in priority order: Danish CPR, Norwegian
/// birth number, SLL reserve number, then the Swedish family.
///
/// Schemes turned off in `options` are skipped. A ten-digit string that
/// fits both the Danish and the Swedish grammar is taken as Danish only if
/// the Danish reading is plausible on `today` and the Swedish one is not.
/// This is a heuristic; some strings are valid under both readings and
/// resolve as Swedish.
#[must_use]
pub fn classify(raw: &str, options: &Options, today: NaiveDate) -> Candidate {
    let raw = raw.trim();
    let all_digits = raw.bytes().all(|b| b.is_ascii_digit());

    if options.allow_danish_cpr_number
        && danish::is_plausible_reading(raw, today)
        && !swedish::is_plausible_reading(raw, today.year())
    {
        Candidate::DanishCpr
    } else if options.allow_norwegian_birth_number && raw.len() == 11 && all_digits {
        Candidate::NorwegianBirthNumber
    } else if options.allow_sll_reserve_number
        && raw.len() == 12
        && all_digits
        && raw.starts_with("99")
    {
        Candidate::SllReserveNumber
    } else {
        Candidate::SwedishFamily
    }
}
