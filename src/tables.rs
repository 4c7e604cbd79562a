//! Symbol Tables
//!
//! Process-wide constant lookups shared by the number engine and the
//! expanders. Built once, never mutated.

use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashMap};

/// Words for 0-19, indexed by value. Index 0 is empty because zero is
/// never spoken inside a larger number.
pub const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words, indexed by the tens digit
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words for successive groups of three digits.
/// Six groups cover the whole `u64` range.
pub const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Words for single digits as read one at a time
pub const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Irregular ordinal forms
pub const ORDINAL_EXCEPTIONS: &[(&str, &str)] = &[
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("four", "fourth"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

/// Decade names indexed by the tens digit of the decade
pub const DECADES: [&str; 10] = [
    "hundreds", "tens", "twenties", "thirties", "forties", "fifties", "sixties", "seventies",
    "eighties", "nineties",
];

/// Roman numeral symbol values
pub const ROMAN_VALUES: &[(char, u64)] = &[
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Words that make a following single-letter roman numeral (I, V, X)
/// unambiguous, e.g. "Chapter V" or "World War I"
pub const ROMAN_TITLE_WORDS: &[&str] = &[
    "war", "chapter", "part", "volume", "act", "scene", "book", "section", "article", "king",
    "queen", "pope", "louis", "henry", "edward", "george", "william", "james", "phase", "round",
    "level", "stage", "class", "type", "version", "episode", "season",
];

/// How many characters before a single-letter roman numeral are searched
/// for a title word
pub const ROMAN_LOOKBACK_CHARS: usize = 30;

/// A currency unit name with its plural form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyName {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl CurrencyName {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// Pick the singular or plural form for a count
    pub fn for_count(&self, count: u64) -> &'static str {
        if count == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}

lazy_static! {
    /// Currency symbol -> unit name
    pub static ref CURRENCY_SYMBOLS: HashMap<char, CurrencyName> = HashMap::from([
        ('$', CurrencyName::new("dollar", "dollars")),
        ('€', CurrencyName::new("euro", "euros")),
        ('£', CurrencyName::new("pound", "pounds")),
        ('¥', CurrencyName::new("yen", "yen")),
        ('₹', CurrencyName::new("rupee", "rupees")),
        ('₩', CurrencyName::new("won", "won")),
        ('₿', CurrencyName::new("bitcoin", "bitcoins")),
    ]);

    /// Lowercased unit abbreviation -> spoken unit
    pub static ref UNITS: HashMap<&'static str, &'static str> = HashMap::from([
        ("km", "kilometers"),
        ("kg", "kilograms"),
        ("mg", "milligrams"),
        ("ml", "milliliters"),
        ("gb", "gigabytes"),
        ("mb", "megabytes"),
        ("kb", "kilobytes"),
        ("tb", "terabytes"),
        ("hz", "hertz"),
        ("khz", "kilohertz"),
        ("mhz", "megahertz"),
        ("ghz", "gigahertz"),
        ("mph", "miles per hour"),
        ("kph", "kilometers per hour"),
        ("ms", "milliseconds"),
        ("ns", "nanoseconds"),
        ("µs", "microseconds"),
        ("μs", "microseconds"),
        ("°c", "degrees Celsius"),
        ("c°", "degrees Celsius"),
        ("°f", "degrees Fahrenheit"),
        ("f°", "degrees Fahrenheit"),
    ]);

    /// Built-in English stopword set
    pub static ref DEFAULT_STOPWORDS: BTreeSet<String> = [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "this", "that",
        "these", "those", "it", "its", "i", "me", "my", "we", "our", "you", "your", "he", "she",
        "him", "her", "they", "them", "their",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();
}

/// Scale word for an uppercase K/M/B/T suffix
pub fn scale_suffix_word(suffix: &str) -> Option<&'static str> {
    match suffix {
        "K" => Some("thousand"),
        "M" => Some("million"),
        "B" => Some("billion"),
        "T" => Some("trillion"),
        _ => None,
    }
}

/// Value of a single roman numeral symbol (case-insensitive)
pub fn roman_value(symbol: char) -> Option<u64> {
    let upper = symbol.to_ascii_uppercase();
    ROMAN_VALUES
        .iter()
        .find(|(c, _)| *c == upper)
        .map(|(_, v)| *v)
}

/// Spoken unit for an abbreviation (case-insensitive)
pub fn unit_name(abbreviation: &str) -> Option<&'static str> {
    UNITS.get(abbreviation.to_lowercase().as_str()).copied()
}
