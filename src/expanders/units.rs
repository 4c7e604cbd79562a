//! Measurement units glued to numbers

use super::{strip_commas, INTEGER};
use crate::numbers::words::number_literal_to_words;
use crate::numbers::DEFAULT_DECIMAL_SEPARATOR;
use crate::tables::unit_name;
use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;

lazy_static! {
    // Longer abbreviations come first so "khz" isn't read as "k" + "hz".
    // A minus only counts when it isn't a hyphen after a word or number.
    static ref UNIT: Regex = Regex::new(&format!(
        r"(?i)((?:(?<![a-zA-Z\d])-)?{}(?:\.\d+)?)\s*(khz|mhz|ghz|mph|kph|km|kg|mg|ml|gb|mb|kb|tb|hz|ms|ns|[µμ]s|°[cf]|[cf]°)(?!\w)",
        INTEGER
    ))
    .expect("unit pattern");
}

/// Expand units ("100km" -> "one hundred kilometers", "25°C" -> "twenty-five degrees Celsius")
pub fn expand_units(text: &str) -> String {
    expand_units_with(text, DEFAULT_DECIMAL_SEPARATOR)
}

pub fn expand_units_with(text: &str, decimal_separator: &str) -> String {
    UNIT.replace_all(text, |caps: &Captures<'_>| {
        let Some(amount) = number_literal_to_words(&strip_commas(&caps[1]), decimal_separator)
        else {
            return caps[0].to_string();
        };
        let unit = &caps[2];
        format!("{} {}", amount, unit_name(unit).unwrap_or(unit))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(expand_units("The trail is 42km long"), "The trail is forty-two kilometers long");
        assert_eq!(expand_units("500kg"), "five hundred kilograms");
        assert_eq!(expand_units("12ms"), "twelve milliseconds");
        assert_eq!(expand_units("60 mph"), "sixty miles per hour");
    }

    #[test]
    fn test_units_case_insensitive() {
        assert_eq!(expand_units("5GB"), "five gigabytes");
        assert_eq!(expand_units("3.6GHz"), "three point six gigahertz");
        assert_eq!(expand_units("2.5GB model"), "two point five gigabytes model");
    }

    #[test]
    fn test_temperature_units() {
        assert_eq!(expand_units("100°C"), "one hundred degrees Celsius");
        assert_eq!(expand_units("72°F today"), "seventy-two degrees Fahrenheit today");
        assert_eq!(expand_units("40C° outside"), "forty degrees Celsius outside");
    }

    #[test]
    fn test_units_need_word_end() {
        assert_eq!(expand_units("5 msgs"), "5 msgs");
        assert_eq!(expand_units("the 80s"), "the 80s");
    }

    #[test]
    fn test_negative_units() {
        assert_eq!(
            expand_units("It was -5°C outside"),
            "It was negative five degrees Celsius outside"
        );
        assert_eq!(
            expand_units("temp -3.5°F"),
            "temp negative three point five degrees Fahrenheit"
        );
        assert_eq!(expand_units("A-5km"), "A-five kilometers");
    }

    #[test]
    fn test_units_thousands() {
        assert_eq!(expand_units("1,000km"), "one thousand kilometers");
    }
}
