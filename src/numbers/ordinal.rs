//! Ordinal number words

use super::words::integer_to_words;
use crate::tables::ORDINAL_EXCEPTIONS;

/// Convert a number to its ordinal word form
///
/// Only the last word is inflected: 21 -> "twenty-first",
/// 100 -> "one hundredth", 1200 -> "twelve hundredth".
pub fn ordinal(n: i64) -> String {
    let cardinal = integer_to_words(n);

    // Split at the last hyphen or space, keeping the separator in the prefix
    match cardinal.rfind(|c| c == '-' || c == ' ') {
        Some(pos) => format!("{}{}", &cardinal[..=pos], ordinal_word(&cardinal[pos + 1..])),
        None => ordinal_word(&cardinal),
    }
}

fn ordinal_word(word: &str) -> String {
    if let Some((_, irregular)) = ORDINAL_EXCEPTIONS.iter().find(|(base, _)| *base == word) {
        return irregular.to_string();
    }

    if word.ends_with('t') {
        format!("{}h", word)
    } else if let Some(stem) = word.strip_suffix('e') {
        format!("{}th", stem)
    } else if let Some(stem) = word.strip_suffix('y') {
        // twenty -> twentieth
        format!("{}ieth", stem)
    } else {
        format!("{}th", word)
    }
}
