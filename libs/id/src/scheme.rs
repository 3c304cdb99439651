//! The closed set of numbering schemes.

use serde::{Deserialize, Serialize};

/// A national or regional numbering scheme.
///
/// Every validated number carries exactly one scheme. Coordination and
/// interim numbers are variants of [`Scheme::PersonalIdentityNumber`] and
/// are told apart by predicates on the value, not by a separate tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Swedish personnummer, including coordination and interim numbers.
    PersonalIdentityNumber,
    /// Swedish reserve number with a letter in the first serial position.
    TNumber,
    /// Västra Götalandsregionen reserve number (`K`, `M` or `X` marker).
    VgrReserveNumber,
    /// Region Stockholm (SLL) reserve number, prefixed `99`.
    SllReserveNumber,
    /// Region Västerbotten (RVB) reserve number.
    RvbReserveNumber,
    /// Norwegian fødselsnummer.
    NorwegianBirthNumber,
    /// Danish CPR number.
    DanishCprNumber,
}

impl Scheme {
    /// Human readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Scheme::PersonalIdentityNumber => "personal identity number",
            Scheme::TNumber => "T-number",
            Scheme::VgrReserveNumber => "VGR reserve number",
            Scheme::SllReserveNumber => "SLL reserve number",
            Scheme::RvbReserveNumber => "RVB reserve number",
            Scheme::NorwegianBirthNumber => "Norwegian birth number",
            Scheme::DanishCprNumber => "Danish CPR number",
        }
    }

    /// Returns true for the Swedish regional reserve-number schemes.
    pub const fn is_reserve(&self) -> bool {
        matches!(
            self,
            Scheme::TNumber
                | Scheme::VgrReserveNumber
                | Scheme::SllReserveNumber
                | Scheme::RvbReserveNumber
        )
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
