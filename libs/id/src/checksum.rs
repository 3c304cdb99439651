//! Check digit algorithms.
//!
//! - Swedish numbers use the Luhn (modulus 10) algorithm over the date and
//!   serial digits.
//! - Norwegian birth numbers carry two weighted modulus 11 check digits.
//!
//! Inputs are ASCII digit strings; the scheme parsers guarantee this.

/// Weights for the first Norwegian check digit.
pub const NORWEGIAN_WEIGHTS_FIRST: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];

/// Weights for the second Norwegian check digit.
pub const NORWEGIAN_WEIGHTS_SECOND: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

fn digit_values(digits: &str) -> impl Iterator<Item = u32> + '_ {
    digits.chars().map(|c| c.to_digit(10).unwrap_or(0))
}

/// Computes the Luhn check digit for a digit string.
///
/// Digits at even positions (0-indexed from the left) are doubled, with 9
/// subtracted when the product exceeds 9. The result is the digit that
/// brings the sum up to the next multiple of 10.
#[must_use]
pub fn luhn(digits: &str) -> u8 {
    let sum: u32 = digit_values(digits)
        .enumerate()
        .map(|(i, v)| {
            let v = if i % 2 == 0 { v * 2 } else { v };
            if v > 9 {
                v - 9
            } else {
                v
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Computes a weighted modulus 11 check value.
///
/// Only the overlap of `digits` and `weights` is summed. Returns `None`
/// when the remainder is 1: the value would be 10, which no single check
/// digit can represent, so such a number can never be valid.
#[must_use]
pub fn mod11(digits: &str, weights: &[u32]) -> Option<u8> {
    let sum: u32 = digit_values(digits).zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        0 => Some(0),
        1 => None,
        remainder => Some((11 - remainder) as u8),
    }
}

/// Computes both Norwegian check digits for the nine digits `DDMMYYNNN`.
///
/// The second digit is computed over the nine digits followed by the first
/// check digit.
#[must_use]
pub fn norwegian_check_digits(digits: &str) -> Option<(u8, u8)> {
    let first = mod11(digits, &NORWEGIAN_WEIGHTS_FIRST)?;
    let extended = format!("{digits}{first}");
    let second = mod11(&extended, &NORWEGIAN_WEIGHTS_SECOND)?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_known_values() {
        assert_eq!(luhn("640327381"), 3);
        assert_eq!(luhn("510818916"), 7);
        assert_eq!(luhn("900101001"), 7);
        assert_eq!(luhn("121212771"), 4);
    }

    #[test]
    fn test_luhn_zero_sum() {
        assert_eq!(luhn("000000000"), 0);
        assert_eq!(luhn("0000000000"), 0);
    }

    #[test]
    fn test_mod11_remainder_one_has_no_digit() {
        assert_eq!(mod11("1", &[1]), None);
        assert_eq!(mod11("0", &[1]), Some(0));
        assert_eq!(mod11("2", &[1]), Some(9));
    }

    #[test]
    fn test_mod11_ignores_extra_weights() {
        assert_eq!(mod11("2", &[1, 7, 7]), Some(9));
    }

    #[test]
    fn test_norwegian_check_digits() {
        assert_eq!(norwegian_check_digits("030162137"), Some((0, 4)));
        assert_eq!(norwegian_check_digits("010105512"), Some((6, 5)));
        assert_eq!(norwegian_check_digits("311299499"), Some((8, 0)));
    }

    #[test]
    fn test_norwegian_check_digits_unrepresentable() {
        // First check value would be 10.
        assert_eq!(norwegian_check_digits("150380950"), None);
        // First digit is 7, second would be 10.
        assert_eq!(norwegian_check_digits("010110800"), None);
    }
}
