//! Roman numerals

use crate::error::{NormResult, NormalizeError};
use crate::tables::roman_value;

/// Decode a roman numeral (case-insensitive) into an integer
///
/// Scans right to left and subtracts any symbol smaller than the largest
/// symbol already seen, so "XIV" is 14 and "MCMXC" is 1990. Fails with
/// [`NormalizeError::InvalidRomanNumeral`] on any other character.
pub fn roman_to_int(token: &str) -> NormResult<u64> {
    let mut total: u64 = 0;
    let mut largest: u64 = 0;

    for symbol in token.chars().rev() {
        let value =
            roman_value(symbol).ok_or_else(|| NormalizeError::InvalidRomanNumeral(token.to_string()))?;
        if value < largest {
            total = total.saturating_sub(value);
        } else {
            total += value;
            largest = value;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_basic() {
        assert_eq!(roman_to_int("I").unwrap(), 1);
        assert_eq!(roman_to_int("IV").unwrap(), 4);
        assert_eq!(roman_to_int("IX").unwrap(), 9);
        assert_eq!(roman_to_int("XIV").unwrap(), 14);
        assert_eq!(roman_to_int("XL").unwrap(), 40);
        assert_eq!(roman_to_int("MCMXC").unwrap(), 1990);
        assert_eq!(roman_to_int("MMXXIV").unwrap(), 2024);
    }

    #[test]
    fn test_roman_lowercase() {
        assert_eq!(roman_to_int("xiv").unwrap(), 14);
    }

    #[test]
    fn test_roman_running_maximum() {
        // Both I's are below the X seen to their right
        assert_eq!(roman_to_int("IIX").unwrap(), 8);
    }

    #[test]
    fn test_roman_invalid() {
        let err = roman_to_int("XIZ").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidRomanNumeral(ref t) if t == "XIZ"));
        assert!(roman_to_int("12").is_err());
    }

    #[test]
    fn test_roman_empty_is_zero() {
        assert_eq!(roman_to_int("").unwrap(), 0);
    }
}
