//! Structured fields extracted from an identification number.

use serde::{Deserialize, Serialize};

/// Separator between the date and serial parts of a short-form number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// `-`: the holder is under 100.
    #[serde(rename = "-")]
    Minus,
    /// `+`: the holder has turned 100.
    #[serde(rename = "+")]
    Plus,
    /// No separator (Norwegian and SLL numbers).
    #[serde(rename = "")]
    Empty,
}

impl Separator {
    /// Reads a separator as typed. A space counts as `-`.
    pub(crate) fn from_typed(typed: &str) -> Option<Self> {
        match typed {
            "+" => Some(Separator::Plus),
            "-" | " " | "" => Some(Separator::Minus),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Minus => "-",
            Separator::Plus => "+",
            Separator::Empty => "",
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The letter a reserve or interim number carried in its first serial
/// position before it was replaced by a digit for checksum purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReserveCharacter(char);

impl ReserveCharacter {
    /// Letters accepted in the first serial position.
    pub const LETTERS: [char; 12] = ['T', 'R', 'S', 'U', 'W', 'X', 'J', 'K', 'L', 'M', 'N', 'D'];

    /// Letters accepted for interim numbers.
    pub const INTERIM_LETTERS: [char; 11] = ['T', 'R', 'S', 'U', 'W', 'X', 'J', 'K', 'L', 'M', 'N'];

    pub(crate) fn new(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        Self::LETTERS.contains(&letter).then_some(Self(letter))
    }

    /// The letter, upper case.
    pub const fn letter(&self) -> char {
        self.0
    }

    pub(crate) fn is_interim(&self) -> bool {
        Self::INTERIM_LETTERS.contains(&self.0)
    }
}

impl std::fmt::Display for ReserveCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a successfully parsed number.
///
/// All fields are digits except the separator. For reserve numbers the
/// serial holds the substituted digit; the original letter is kept
/// separately as a [`ReserveCharacter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedFields {
    pub(crate) century: u8,
    pub(crate) year: u8,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) separator: Separator,
    pub(crate) serial: String,
    pub(crate) check: String,
}

impl ParsedFields {
    pub(crate) fn new(
        century: u8,
        year: u8,
        month: u8,
        day: u8,
        separator: Separator,
        serial: impl Into<String>,
        check: impl Into<String>,
    ) -> Self {
        Self {
            century,
            year,
            month,
            day,
            separator,
            serial: serial.into(),
            check: check.into(),
        }
    }

    /// Two-digit century.
    pub fn century(&self) -> u8 {
        self.century
    }

    /// Two-digit year.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Century and year combined.
    pub fn full_year(&self) -> i32 {
        i32::from(self.century) * 100 + i32::from(self.year)
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day field as encoded (61–91 for coordination numbers).
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Serial digits (3 digits, or 5 for SLL reserve numbers).
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Check digit(s): one digit, or two for Norwegian birth numbers.
    pub fn check(&self) -> &str {
        &self.check
    }

    /// Digits the Swedish Luhn check runs over: `YYMMDD` followed by the serial.
    pub(crate) fn date_serial_digits(&self) -> String {
        format!("{:02}{:02}{:02}{}", self.year, self.month, self.day, self.serial)
    }
}
