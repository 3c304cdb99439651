//! Error types for identification number parsing and validation.

use thiserror::Error;

use crate::Scheme;

/// Errors that can occur when parsing or validating an identification number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the grammar of any scheme that was attempted.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The grammar matched but the computed check digit(s) disagree.
    #[error("{scheme} checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        scheme: Scheme,
        expected: String,
        actual: String,
    },

    /// Grammar and checksum matched but the encoded date does not exist.
    #[error("invalid {scheme} date: {reason}")]
    DateInvalid { scheme: Scheme, reason: String },

    /// The input is a valid number of a kind the options turn off.
    #[error("{scheme} rejected: {option} is disabled")]
    SchemeDisabled {
        scheme: Scheme,
        option: &'static str,
    },

    /// The caller supplied a value that cannot be read as a number string.
    #[error("expected a string or an integer, got {found}")]
    TypeMismatch { found: &'static str },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn date(scheme: Scheme, reason: impl Into<String>) -> Self {
        Self::DateInvalid {
            scheme,
            reason: reason.into(),
        }
    }

    /// How far resolution got before failing.
    ///
    /// When several schemes are attempted, the error with the highest rank
    /// is the one reported.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            ParseError::TypeMismatch { .. } => 0,
            ParseError::MalformedInput { .. } => 1,
            ParseError::ChecksumMismatch { .. } => 2,
            ParseError::DateInvalid { .. } => 3,
            ParseError::SchemeDisabled { .. } => 4,
        }
    }

    /// Returns true if the input did not match the grammar.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedInput { .. })
    }

    /// Returns true if the check digit(s) did not match.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, ParseError::ChecksumMismatch { .. })
    }

    /// Returns true if the encoded date does not exist.
    pub fn is_date_invalid(&self) -> bool {
        matches!(self, ParseError::DateInvalid { .. })
    }

    /// Returns true if the number is valid but its kind is turned off.
    pub fn is_scheme_disabled(&self) -> bool {
        matches!(self, ParseError::SchemeDisabled { .. })
    }

    /// Returns true if the caller passed a value of the wrong type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ParseError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_progress() {
        let malformed = ParseError::malformed("x");
        let checksum = ParseError::ChecksumMismatch {
            scheme: Scheme::TNumber,
            expected: "1".into(),
            actual: "2".into(),
        };
        let date = ParseError::date(Scheme::PersonalIdentityNumber, "x");
        let disabled = ParseError::SchemeDisabled {
            scheme: Scheme::PersonalIdentityNumber,
            option: "allowCoordinationNumber",
        };

        assert!(malformed.rank() < checksum.rank());
        assert!(checksum.rank() < date.rank());
        assert!(date.rank() < disabled.rank());
    }

    #[test]
    fn test_display_messages() {
        let err = ParseError::SchemeDisabled {
            scheme: Scheme::PersonalIdentityNumber,
            option: "allowCoordinationNumber",
        };
        assert_eq!(
            err.to_string(),
            "personal identity number rejected: allowCoordinationNumber is disabled"
        );

        let err = ParseError::TypeMismatch { found: "boolean" };
        assert_eq!(err.to_string(), "expected a string or an integer, got boolean");
    }

    #[test]
    fn test_predicates() {
        assert!(ParseError::malformed("x").is_malformed());
        assert!(ParseError::date(Scheme::DanishCprNumber, "x").is_date_invalid());
        assert!(!ParseError::malformed("x").is_scheme_disabled());
        assert!(ParseError::TypeMismatch { found: "null" }.is_type_mismatch());
    }
}
