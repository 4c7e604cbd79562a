//! Digit strings that are identifiers rather than quantities: IP
//! addresses, phone numbers and model/version names.

use crate::numbers::digits_to_words;
use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;

lazy_static! {
    static ref IPV4: Regex =
        Regex::new(r"\b([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\b")
            .expect("ipv4 pattern");

    // Longest layout first so a 10-digit number isn't split into 3 + 7
    static ref PHONE_PATTERNS: [Regex; 3] = [
        // 1-800-555-0199
        Regex::new(r"(?<!\d-)(?<!\d)\b([0-9]{1,2})-([0-9]{3})-([0-9]{3})-([0-9]{4})\b(?!-\d)")
            .expect("11-digit phone pattern"),
        // 555-123-4567
        Regex::new(r"(?<!\d-)(?<!\d)\b([0-9]{3})-([0-9]{3})-([0-9]{4})\b(?!-\d)")
            .expect("10-digit phone pattern"),
        // 555-1234
        Regex::new(r"(?<!\d-)\b([0-9]{3})-([0-9]{4})\b(?!-\d)").expect("7-digit phone pattern"),
    ];

    // gpt-3, GPT-3.5, Python-3.10, CUDA-11
    static ref MODEL_VERSION: Regex =
        Regex::new(r"\b([a-zA-Z][a-zA-Z0-9]*)-(\d[\d.]*)(?=[^\d.]|$)")
            .expect("model version pattern");
}

/// Read every digit of each capture group, joined by `separator`
fn spell_groups(caps: &Captures<'_>, separator: &str) -> String {
    (1..caps.len())
        .filter_map(|i| caps.get(i))
        .map(|group| digits_to_words(group.as_str()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Read IPv4 addresses digit by digit
///
/// "192.168.1.1" -> "one nine two dot one six eight dot one dot one"
pub fn expand_ip_addresses(text: &str) -> String {
    IPV4.replace_all(text, |caps: &Captures<'_>| spell_groups(caps, " dot "))
        .into_owned()
}

/// Read hyphenated 7, 10 and 11 digit phone numbers digit by digit
///
/// "555-1234" -> "five five five one two three four"
pub fn expand_phone_numbers(text: &str) -> String {
    PHONE_PATTERNS.iter().fold(text.to_string(), |acc, pattern| {
        pattern
            .replace_all(&acc, |caps: &Captures<'_>| spell_groups(caps, " "))
            .into_owned()
    })
}

/// Replace the hyphen in letter-hyphen-digit names with a space so the
/// number isn't read as negative ("gpt-3" -> "gpt 3")
pub fn expand_model_names(text: &str) -> String {
    MODEL_VERSION
        .replace_all(text, |caps: &Captures<'_>| format!("{} {}", &caps[1], &caps[2]))
        .into_owned()
}
