//! Domain Expanders
//!
//! Each expander finds one lexical pattern (a price, a clock time, a
//! phone number, ...) and rewrites the matched spans into words. Text
//! that doesn't match is left alone, and so is any match whose digits
//! fail to parse.
//!
//! Every expander is a plain `&str -> String` function so it can be
//! tested on its own. Expanders that read decimals also have a `_with`
//! variant taking the word spoken for the decimal point.

pub mod identifiers;
pub mod money;
pub mod numeric;
pub mod roman;
pub mod time;
pub mod units;

pub use identifiers::{expand_ip_addresses, expand_model_names, expand_phone_numbers};
pub use money::{
    expand_currency, expand_currency_with, expand_percentages, expand_percentages_with,
};
pub use numeric::{
    expand_decades, expand_fractions, expand_ordinals, expand_ranges, expand_scale_suffixes,
    expand_scale_suffixes_with, expand_scientific_notation, expand_scientific_notation_with,
    normalize_leading_decimals, replace_numbers, replace_numbers_with,
};
pub use roman::expand_roman_numerals;
pub use time::expand_time;
pub use units::{expand_units, expand_units_with};

/// Integer part of a number: either properly comma-grouped ("1,200,000")
/// or a plain digit run
pub(crate) const INTEGER: &str = r"(?:\d{1,3}(?:,\d{3})+(?!\d)|\d+)";

/// Strip thousands separators from a captured number
pub(crate) fn strip_commas(raw: &str) -> String {
    raw.replace(',', "")
}
