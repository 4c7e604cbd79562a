//! Plain numeric forms: ordinals, fractions, ranges, decades, scale
//! suffixes, scientific notation, leading decimals and the catch-all
//! bare-number pass.

use super::{strip_commas, INTEGER};
use crate::numbers::words::{number_literal_to_words, unsigned_to_words};
use crate::numbers::{digits_to_words, integer_to_words, ordinal, DEFAULT_DECIMAL_SEPARATOR};
use crate::tables::{scale_suffix_word, DECADES};
use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref NEGATIVE_LEADING_DECIMAL: Regex =
        Regex::new(r"(?<!\d)-\.(\d)").expect("negative leading decimal pattern");
    static ref LEADING_DECIMAL: Regex =
        Regex::new(r"(?<!\d)\.(\d)").expect("leading decimal pattern");

    // 1e-4, 2.5e10, 6.022E23
    static ref SCIENTIFIC: Regex =
        Regex::new(r"(?<![a-zA-Z\d])(-?\d+(?:\.\d+)?)[eE]([+-]?\d+)(?![a-zA-Z\d])")
            .expect("scientific pattern");

    static ref ORDINAL: Regex =
        Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").expect("ordinal pattern");

    // 7B, 340M, 1.5K, -5K. Uppercase only, glued to the number.
    static ref SCALE_SUFFIX: Regex = Regex::new(&format!(
        r"(?<![a-zA-Z\d.,])(-?{}(?:\.\d+)?)([KMBT])(?![a-zA-Z\d])",
        INTEGER
    ))
    .expect("scale suffix pattern");

    static ref FRACTION: Regex =
        Regex::new(r"(?<!\w)(-?\d+)\s*/\s*(\d+)\b").expect("fraction pattern");

    // 80s, 1980s, 2020s
    static ref DECADE: Regex = Regex::new(r"\b(\d{1,3})0s\b").expect("decade pattern");

    static ref RANGE: Regex = Regex::new(r"(?<!\w)(\d+)-(\d+)(?!\w)").expect("range pattern");

    // Digits glued to letters: A100, M3, IPv6, v2.0
    static ref GLUED_DIGITS: Regex =
        Regex::new(r"(?<=[a-zA-Z])\d+(?:\.\d+)*").expect("glued digits pattern");

    // Dotted versions with three or more parts: 1.2.3, 3.10.4
    static ref DOTTED_VERSION: Regex =
        Regex::new(r"(?<![\w.])\d+(?:\.\d+){2,}(?!\w)").expect("dotted version pattern");

    // A leading minus counts only when no letter precedes it ("gpt-3" is not negative)
    static ref NUMBER: Regex = Regex::new(&format!(
        r"(?<![a-zA-Z\d])-?{}(?:\.\d+)?",
        INTEGER
    ))
    .expect("number pattern");
}

/// Rewrite bare leading decimals so later passes see a digit before the point
///
/// ".5 teaspoons" -> "0.5 teaspoons", "-.25" -> "-0.25"
pub fn normalize_leading_decimals(text: &str) -> String {
    let text = NEGATIVE_LEADING_DECIMAL
        .replace_all(text, |caps: &Captures<'_>| format!("-0.{}", &caps[1]))
        .into_owned();
    LEADING_DECIMAL
        .replace_all(&text, |caps: &Captures<'_>| format!("0.{}", &caps[1]))
        .into_owned()
}

/// Expand scientific notation ("1e-4" -> "one times ten to the negative four")
pub fn expand_scientific_notation(text: &str) -> String {
    expand_scientific_notation_with(text, DEFAULT_DECIMAL_SEPARATOR)
}

pub fn expand_scientific_notation_with(text: &str, decimal_separator: &str) -> String {
    SCIENTIFIC
        .replace_all(text, |caps: &Captures<'_>| {
            let mantissa = number_literal_to_words(&caps[1], decimal_separator);
            let exponent = caps[2].parse::<i64>().ok().map(integer_to_words);
            match (mantissa, exponent) {
                (Some(mantissa), Some(exponent)) => {
                    format!("{} times ten to the {}", mantissa, exponent)
                }
                _ => {
                    debug!("Leaving malformed scientific number untouched: {}", &caps[0]);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Expand ordinals ("1st" -> "first", "21st" -> "twenty-first")
pub fn expand_ordinals(text: &str) -> String {
    ORDINAL
        .replace_all(text, |caps: &Captures<'_>| match caps[1].parse::<i64>() {
            Ok(n) => ordinal(n),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

/// Expand scale suffixes glued to numbers ("7B" -> "seven billion")
pub fn expand_scale_suffixes(text: &str) -> String {
    expand_scale_suffixes_with(text, DEFAULT_DECIMAL_SEPARATOR)
}

pub fn expand_scale_suffixes_with(text: &str, decimal_separator: &str) -> String {
    SCALE_SUFFIX
        .replace_all(text, |caps: &Captures<'_>| {
            let amount = number_literal_to_words(&strip_commas(&caps[1]), decimal_separator);
            match (amount, scale_suffix_word(&caps[2])) {
                (Some(amount), Some(scale)) => format!("{} {}", amount, scale),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Expand simple fractions ("3/4" -> "three quarters", "5/8" -> "five eighths")
pub fn expand_fractions(text: &str) -> String {
    FRACTION
        .replace_all(text, |caps: &Captures<'_>| {
            let numerator = caps[1].parse::<i64>().ok();
            let denominator = caps[2].parse::<i64>().ok();
            match (numerator, denominator) {
                (Some(numerator), Some(denominator)) if denominator != 0 => {
                    format!(
                        "{} {}",
                        integer_to_words(numerator),
                        denominator_word(numerator, denominator)
                    )
                }
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn denominator_word(numerator: i64, denominator: i64) -> String {
    let singular = numerator.unsigned_abs() == 1;
    match denominator {
        2 if singular => "half".to_string(),
        2 => "halves".to_string(),
        4 if singular => "quarter".to_string(),
        4 => "quarters".to_string(),
        _ => {
            let word = ordinal(denominator);
            if singular {
                word
            } else {
                format!("{}s", word)
            }
        }
    }
}

/// Expand decades ("80s" -> "eighties", "1980s" -> "nineteen eighties")
pub fn expand_decades(text: &str) -> String {
    DECADE
        .replace_all(text, |caps: &Captures<'_>| {
            let Ok(base) = caps[1].parse::<u64>() else {
                return caps[0].to_string();
            };
            let decade = DECADES[(base % 10) as usize];
            if base < 10 {
                decade.to_string()
            } else {
                format!("{} {}", unsigned_to_words(base / 10), decade)
            }
        })
        .into_owned()
}

/// Expand numeric ranges ("10-20" -> "ten to twenty")
pub fn expand_ranges(text: &str) -> String {
    RANGE
        .replace_all(text, |caps: &Captures<'_>| {
            match (caps[1].parse::<i64>(), caps[2].parse::<i64>()) {
                (Ok(low), Ok(high)) => {
                    format!("{} to {}", integer_to_words(low), integer_to_words(high))
                }
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Replace every remaining number with words
///
/// This is the catch-all that runs after every specific expander.
pub fn replace_numbers(text: &str) -> String {
    replace_numbers_with(text, true, DEFAULT_DECIMAL_SEPARATOR)
}

/// [`replace_numbers`] with options. When `replace_floats` is false a
/// decimal is truncated toward zero and read as an integer.
///
/// Digits glued to letters are read one by one ("A100" -> "A one zero
/// zero") and dotted versions part by part ("1.2.3" -> "one point two
/// point three"), so no digit survives.
pub fn replace_numbers_with(text: &str, replace_floats: bool, decimal_separator: &str) -> String {
    let point = format!(" {} ", decimal_separator);

    let text = GLUED_DIGITS
        .replace_all(text, |caps: &Captures<'_>| {
            let words = caps[0]
                .split('.')
                .map(digits_to_words)
                .collect::<Vec<_>>()
                .join(point.as_str());
            spaced(text, caps, format!(" {}", words))
        })
        .into_owned();

    let text = DOTTED_VERSION
        .replace_all(&text, |caps: &Captures<'_>| {
            let parts: Option<Vec<String>> = caps[0]
                .split('.')
                .map(|part| part.parse::<u64>().ok().map(unsigned_to_words))
                .collect();
            match parts {
                Some(parts) => parts.join(point.as_str()),
                None => digits_to_words(&caps[0]),
            }
        })
        .into_owned();

    NUMBER
        .replace_all(&text, |caps: &Captures<'_>| {
            let raw = strip_commas(&caps[0]);
            let words = if raw.contains('.') && !replace_floats {
                truncated_float_words(&raw)
            } else {
                number_literal_to_words(&raw, decimal_separator)
            };
            match words {
                Some(words) => spaced(&text, caps, words),
                None => {
                    debug!("Leaving malformed number untouched: {}", &caps[0]);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Append a space to `words` when the match is directly followed by a
/// letter ("3D" -> "three D")
fn spaced(text: &str, caps: &Captures<'_>, words: String) -> String {
    let end = caps.get(0).map_or(text.len(), |m| m.end());
    if text[end..].starts_with(char::is_alphabetic) {
        format!("{} ", words)
    } else {
        words
    }
}

fn truncated_float_words(raw: &str) -> Option<String> {
    let value = raw.parse::<f64>().ok()?.trunc();
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(integer_to_words(value as i64))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_decimals() {
        assert_eq!(normalize_leading_decimals(".5 teaspoons"), "0.5 teaspoons");
        assert_eq!(normalize_leading_decimals("A -.05 correction"), "A -0.05 correction");
        assert_eq!(normalize_leading_decimals("pi is 3.14"), "pi is 3.14");
        assert_eq!(normalize_leading_decimals("the end."), "the end.");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(
            expand_scientific_notation("lr 1e-4"),
            "lr one times ten to the negative four"
        );
        assert_eq!(
            expand_scientific_notation("2.5e10"),
            "two point five times ten to the ten"
        );
        assert_eq!(
            expand_scientific_notation("6.022E+23"),
            "six point zero two two times ten to the twenty-three"
        );
        // Hex-looking and word-embedded tokens are left alone
        assert_eq!(expand_scientific_notation("0x1e5"), "0x1e5");
        assert_eq!(expand_scientific_notation("be5"), "be5");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(expand_ordinals("1st place"), "first place");
        assert_eq!(expand_ordinals("the 21st century"), "the twenty-first century");
        assert_eq!(expand_ordinals("100th day"), "one hundredth day");
        assert_eq!(expand_ordinals("42ND"), "forty-second");
    }

    #[test]
    fn test_scale_suffixes() {
        assert_eq!(expand_scale_suffixes("7B parameters"), "seven billion parameters");
        assert_eq!(expand_scale_suffixes("340M model"), "three hundred forty million model");
        assert_eq!(expand_scale_suffixes("1.5K salary"), "one point five thousand salary");
        assert_eq!(expand_scale_suffixes("2T tokens"), "two trillion tokens");
    }

    #[test]
    fn test_negative_scale_suffixes() {
        assert_eq!(expand_scale_suffixes("a -5K loss"), "a negative five thousand loss");
        assert_eq!(expand_scale_suffixes("-1.5M"), "negative one point five million");
        assert_eq!(expand_scale_suffixes("10-5K"), "10-five thousand");
    }

    #[test]
    fn test_scale_suffixes_need_a_standalone_number() {
        assert_eq!(expand_scale_suffixes("M3 chip"), "M3 chip");
        assert_eq!(expand_scale_suffixes("A100B"), "A100B");
        assert_eq!(expand_scale_suffixes("7b"), "7b");
        assert_eq!(expand_scale_suffixes("5GB"), "5GB");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(expand_fractions("1/2 cup"), "one half cup");
        assert_eq!(expand_fractions("3/2"), "three halves");
        assert_eq!(expand_fractions("1/4"), "one quarter");
        assert_eq!(expand_fractions("3/4 mile"), "three quarters mile");
        assert_eq!(expand_fractions("2/3 done"), "two thirds done");
        assert_eq!(expand_fractions("5/8 inch"), "five eighths inch");
        assert_eq!(expand_fractions("1/3"), "one third");
    }

    #[test]
    fn test_fraction_division_by_zero() {
        assert_eq!(expand_fractions("5/0"), "5/0");
    }

    #[test]
    fn test_negative_fractions() {
        assert_eq!(expand_fractions("-1/2 cup"), "negative one half cup");
        assert_eq!(expand_fractions("-3/4"), "negative three quarters");
        assert_eq!(expand_fractions("-1/3"), "negative one third");
        assert_eq!(expand_fractions("x-1/2"), "x-one half");
    }

    #[test]
    fn test_decades() {
        assert_eq!(expand_decades("the 80s music"), "the eighties music");
        assert_eq!(expand_decades("1990s grunge"), "nineteen nineties grunge");
        assert_eq!(expand_decades("the 2020s"), "the twenty twenties");
        assert_eq!(expand_decades("'90s"), "'nineties");
    }

    #[test]
    fn test_ranges() {
        assert_eq!(expand_ranges("pages 10-20"), "pages ten to twenty");
        assert_eq!(expand_ranges("5-10 degrees"), "five to ten degrees");
        assert_eq!(expand_ranges("gpt-3"), "gpt-3");
        assert_eq!(expand_ranges("a1-2"), "a1-2");
    }

    #[test]
    fn test_replace_numbers() {
        assert_eq!(
            replace_numbers("There are 1200 students"),
            "There are twelve hundred students"
        );
        assert_eq!(replace_numbers("Pi is 3.14"), "Pi is three point one four");
        assert_eq!(replace_numbers("1.50 volts"), "one point five zero volts");
        assert_eq!(replace_numbers("-5 degrees"), "negative five degrees");
        assert_eq!(replace_numbers("7,900,000,000 people"), "seven billion nine hundred million people");
    }

    #[test]
    fn test_replace_numbers_respects_hyphenated_names() {
        assert_eq!(replace_numbers("gpt-3 rocks"), "gpt-three rocks");
        assert_eq!(replace_numbers("gpt 3 rocks"), "gpt three rocks");
    }

    #[test]
    fn test_replace_numbers_reads_glued_digits() {
        assert_eq!(replace_numbers("A100 and M3"), "A one zero zero and M three");
        assert_eq!(replace_numbers("v2.0 ships"), "v two point zero ships");
        assert_eq!(replace_numbers("mp3s"), "mp three s");
        assert_eq!(replace_numbers("a 3D model"), "a three D model");
    }

    #[test]
    fn test_replace_numbers_reads_dotted_versions() {
        assert_eq!(replace_numbers("version 1.2.3"), "version one point two point three");
        assert_eq!(
            replace_numbers("Python 3.10.4 released"),
            "Python three point ten point four released"
        );
        assert_eq!(
            replace_numbers_with("1.2.3", true, "dot"),
            "one dot two dot three"
        );
        assert_eq!(replace_numbers("ends 1.2.3."), "ends one point two point three.");
    }

    #[test]
    fn test_replace_numbers_keeps_list_commas() {
        assert_eq!(replace_numbers("1, 2, 3"), "one, two, three");
    }

    #[test]
    fn test_replace_numbers_without_floats() {
        assert_eq!(replace_numbers_with("3.99 and -2.5", false, "point"), "three and negative two");
        assert_eq!(replace_numbers_with("3.5", true, "dot"), "three dot five");
    }

    #[test]
    fn test_replace_numbers_overflow_is_untouched() {
        assert_eq!(
            replace_numbers("99999999999999999999"),
            "99999999999999999999"
        );
    }
}
