//! Cardinal number words
//!
//! Integers are read in groups of three digits joined by scale words.
//! Decimal literals are read from their source text so trailing zeros
//! survive ("1.50" -> "one point five zero").

use crate::error::{NormResult, NormalizeError};
use crate::tables::{DIGITS, ONES, SCALES, TENS};

/// Word spoken for the decimal point unless configured otherwise
pub const DEFAULT_DECIMAL_SEPARATOR: &str = "point";

/// Render 1-999 as words. Returns an empty string for 0.
fn three_digits_to_words(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let remainder = (n % 100) as usize;
    let mut parts: Vec<String> = Vec::with_capacity(2);

    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
    }
    if remainder >= 20 {
        let tens = TENS[remainder / 10];
        let ones = ONES[remainder % 10];
        if ones.is_empty() {
            parts.push(tens.to_string());
        } else {
            parts.push(format!("{}-{}", tens, ones));
        }
    } else if remainder > 0 {
        parts.push(ONES[remainder].to_string());
    }

    parts.join(" ")
}

/// Convert an integer to English words
///
/// - `0` -> "zero"
/// - `-42` -> "negative forty-two"
/// - `1200` -> "twelve hundred"
/// - `1_000_000` -> "one million"
pub fn integer_to_words(n: i64) -> String {
    if n < 0 {
        return format!("negative {}", unsigned_to_words(n.unsigned_abs()));
    }
    unsigned_to_words(n as u64)
}

pub(crate) fn unsigned_to_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    // 1100-1900 style: "twelve hundred", but 1000 stays "one thousand"
    if (100..=9999).contains(&n) && n % 100 == 0 && n % 1000 != 0 {
        let hundreds = (n / 100) as usize;
        if hundreds < 20 {
            return format!("{} hundred", ONES[hundreds]);
        }
    }

    let mut groups = Vec::new();
    let mut rest = n;
    for scale in SCALES {
        let chunk = rest % 1000;
        if chunk > 0 {
            let words = three_digits_to_words(chunk);
            if scale.is_empty() {
                groups.push(words);
            } else {
                groups.push(format!("{} {}", words, scale));
            }
        }
        rest /= 1000;
        if rest == 0 {
            break;
        }
    }

    groups.reverse();
    groups.join(" ")
}

/// Read every ASCII digit of `digits` individually ("2024" -> "two zero two four").
/// Non-digit characters are skipped.
pub fn digits_to_words(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a decimal literal to words, reading the fractional digits one by one
///
/// Accepts `-?digits[.digits]` where the integer part may be empty when a
/// fractional part is present (".5" reads as "zero point five").
pub fn float_to_words(value: &str, decimal_separator: &str) -> NormResult<String> {
    let malformed = || NormalizeError::MalformedNumber(value.to_string());

    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return Err(malformed());
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !all_digits(frac) {
            return Err(malformed());
        }
    } else if int_part.is_empty() {
        return Err(malformed());
    }

    let int_words = if int_part.is_empty() {
        "zero".to_string()
    } else {
        unsigned_to_words(int_part.parse::<u64>().map_err(|_| malformed())?)
    };

    let words = match frac_part {
        Some(frac) => format!("{} {} {}", int_words, decimal_separator, digits_to_words(frac)),
        None => int_words,
    };

    if negative {
        Ok(format!("negative {}", words))
    } else {
        Ok(words)
    }
}

/// Convert a binary float to words via its shortest decimal representation
pub fn float_value_to_words(value: f64, decimal_separator: &str) -> NormResult<String> {
    if !value.is_finite() {
        return Err(NormalizeError::MalformedNumber(value.to_string()));
    }
    float_to_words(&value.to_string(), decimal_separator)
}

/// Read a captured numeric literal as an integer or a float, whichever it is.
/// Callers leave the matched text untouched on `None`.
pub(crate) fn number_literal_to_words(raw: &str, decimal_separator: &str) -> Option<String> {
    if raw.contains('.') {
        float_to_words(raw, decimal_separator).ok()
    } else {
        raw.parse::<i64>().ok().map(integer_to_words)
    }
}
