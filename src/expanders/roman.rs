//! Roman numerals in running text

use crate::numbers::roman_to_int;
use crate::numbers::words::unsigned_to_words;
use crate::tables::{ROMAN_LOOKBACK_CHARS, ROMAN_TITLE_WORDS};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    static ref ROMAN: Regex =
        Regex::new(r"\b(M{0,4})(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})\b")
            .expect("roman numeral pattern");
    static ref TITLE_WORD: Regex =
        Regex::new(&format!(r"(?i)\b(?:{})\b", ROMAN_TITLE_WORDS.join("|")))
            .expect("title word pattern");
}

/// Expand uppercase roman numerals ("Chapter IV" -> "Chapter four")
///
/// A lone I, V or X is only expanded when a title word such as "war" or
/// "chapter" appears shortly before it, so the pronoun "I" survives.
pub fn expand_roman_numerals(text: &str) -> String {
    ROMAN
        .replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            if token.is_empty() {
                return String::new();
            }

            let start = caps.get(0).map_or(0, |m| m.start());
            if is_ambiguous(token) && !has_title_before(text, start) {
                return token.to_string();
            }

            match roman_to_int(token) {
                Ok(0) => token.to_string(),
                Ok(value) => unsigned_to_words(value),
                Err(e) => {
                    debug!("Leaving roman numeral untouched: {}", e);
                    token.to_string()
                }
            }
        })
        .into_owned()
}

fn is_ambiguous(token: &str) -> bool {
    matches!(token, "I" | "V" | "X")
}

/// Whether a title word occurs in the window of characters before `start`
fn has_title_before(text: &str, start: usize) -> bool {
    let before = &text[..start];
    let window_start = before
        .char_indices()
        .rev()
        .nth(ROMAN_LOOKBACK_CHARS - 1)
        .map_or(0, |(i, _)| i);
    TITLE_WORD.is_match(&before[window_start..])
}
