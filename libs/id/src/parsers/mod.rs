//! Field extraction, one grammar per scheme.
//!
//! Parsers only match shape and do the scheme's post-processing (reserve
//! letter handling, century tables). Checksums, date checks and option
//! gating happen in [`crate::validate`].

pub(crate) mod danish;
pub(crate) mod norwegian;
pub(crate) mod sll;
pub(crate) mod swedish;

use regex::Captures;

use crate::ParseError;

/// Reads a numeric capture group.
pub(crate) fn capture_number<T: std::str::FromStr>(
    caps: &Captures<'_>,
    index: usize,
) -> Result<T, ParseError> {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ParseError::malformed("missing numeric field"))
}

/// Reads a capture group as text, empty if it did not participate.
pub(crate) fn capture_text<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
