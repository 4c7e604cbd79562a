//! Currency and percentage amounts

use super::{strip_commas, INTEGER};
use crate::numbers::words::{number_literal_to_words, unsigned_to_words};
use crate::numbers::DEFAULT_DECIMAL_SEPARATOR;
use crate::tables::{scale_suffix_word, CURRENCY_SYMBOLS};
use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    // $100, €1,200.50, £9.99, $85K, $2.5M
    static ref CURRENCY: Regex = Regex::new(&format!(
        r"([$€£¥₹₩₿])\s*({}(?:\.\d+)?)\s*([KMBT])?(?![a-zA-Z\d])",
        INTEGER
    ))
    .expect("currency pattern");

    // 50%, 3.5 %, -2%, 10-20%
    static ref PERCENT: Regex = Regex::new(&format!(
        r"(?<![a-zA-Z\d.,])(-?{int}(?:\.\d+)?)(?:\s*-\s*({int}(?:\.\d+)?))?\s*%",
        int = INTEGER
    ))
    .expect("percent pattern");
}

/// Expand currency amounts ("$4.99" -> "four dollars and ninety-nine cents")
pub fn expand_currency(text: &str) -> String {
    expand_currency_with(text, DEFAULT_DECIMAL_SEPARATOR)
}

/// [`expand_currency`] with a custom decimal separator word, used for
/// scaled amounts like "$2.5M"
pub fn expand_currency_with(text: &str, decimal_separator: &str) -> String {
    CURRENCY
        .replace_all(text, |caps: &Captures<'_>| {
            currency_words(caps, decimal_separator).unwrap_or_else(|| {
                debug!("Leaving malformed currency amount untouched: {}", &caps[0]);
                caps[0].to_string()
            })
        })
        .into_owned()
}

fn currency_words(caps: &Captures<'_>, decimal_separator: &str) -> Option<String> {
    let symbol = caps[1].chars().next()?;
    let name = CURRENCY_SYMBOLS.get(&symbol)?;
    let raw = strip_commas(&caps[2]);

    // $85K -> "eighty-five thousand dollars"
    if let Some(suffix) = caps.get(3) {
        let scale = scale_suffix_word(suffix.as_str())?;
        let amount = number_literal_to_words(&raw, decimal_separator)?;
        return Some(format!("{} {} {}", amount, scale, name.plural));
    }

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw.as_str(), None),
    };
    let whole: u64 = whole.parse().ok()?;
    let mut words = format!("{} {}", unsigned_to_words(whole), name.for_count(whole));

    if let Some(fraction) = fraction {
        // Only the first two digits count as cents; ".5" means fifty
        let cents: String = fraction.chars().chain(std::iter::repeat('0')).take(2).collect();
        let cents: u64 = cents.parse().ok()?;
        if cents > 0 {
            let unit = if cents == 1 { "cent" } else { "cents" };
            words.push_str(&format!(" and {} {}", unsigned_to_words(cents), unit));
        }
    }

    Some(words)
}

/// Expand percentages ("50%" -> "fifty percent", "-2%" -> "negative two percent",
/// "10-20%" -> "ten to twenty percent")
pub fn expand_percentages(text: &str) -> String {
    expand_percentages_with(text, DEFAULT_DECIMAL_SEPARATOR)
}

pub fn expand_percentages_with(text: &str, decimal_separator: &str) -> String {
    PERCENT
        .replace_all(text, |caps: &Captures<'_>| {
            percent_words(caps, decimal_separator).unwrap_or_else(|| {
                debug!("Leaving malformed percentage untouched: {}", &caps[0]);
                caps[0].to_string()
            })
        })
        .into_owned()
}

fn percent_words(caps: &Captures<'_>, decimal_separator: &str) -> Option<String> {
    let low = number_literal_to_words(&strip_commas(&caps[1]), decimal_separator)?;
    match caps.get(2) {
        Some(high) => {
            let high = number_literal_to_words(&strip_commas(high.as_str()), decimal_separator)?;
            Some(format!("{} to {} percent", low, high))
        }
        None => Some(format!("{} percent", low)),
    }
}
