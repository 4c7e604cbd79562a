//! Clock times

use crate::numbers::words::unsigned_to_words;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    // Minutes need two digits so a score like "3:0" is left alone.
    // Seconds are accepted but not spoken.
    static ref TIME: Regex =
        Regex::new(r"(?i)\b(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*(am|pm))?\b").expect("time pattern");

    // 14:00-16:00, 9:30am - 11:00am
    static ref TIME_RANGE: Regex = Regex::new(
        r"(?i)\b(\d{1,2}:\d{2}(?::\d{2})?(?:\s*(?:am|pm))?)\s*-\s*(\d{1,2}:\d{2})"
    )
    .expect("time range pattern");
}

/// Expand clock times
///
/// - "3:30pm" -> "three thirty pm"
/// - "14:00" -> "fourteen hundred"
/// - "9:05 AM" -> "nine oh five am"
/// - "12:00pm" -> "twelve pm"
/// - "14:00-16:00" -> "fourteen hundred to sixteen hundred"
pub fn expand_time(text: &str) -> String {
    let text = TIME_RANGE.replace_all(text, "${1} to ${2}");
    TIME.replace_all(&text, |caps: &Captures<'_>| {
        time_words(caps).unwrap_or_else(|| {
            debug!("Leaving malformed time untouched: {}", &caps[0]);
            caps[0].to_string()
        })
    })
    .into_owned()
}

fn time_words(caps: &Captures<'_>) -> Option<String> {
    let hour: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let meridiem = caps.get(4).map(|m| m.as_str().to_lowercase());
    let hour_words = unsigned_to_words(hour);

    let spoken = match (minutes, &meridiem) {
        (0, None) => format!("{} hundred", hour_words),
        (0, Some(_)) => hour_words,
        (1..=9, _) => format!("{} oh {}", hour_words, unsigned_to_words(minutes)),
        _ => format!("{} {}", hour_words, unsigned_to_words(minutes)),
    };

    Some(match meridiem {
        Some(meridiem) => format!("{} {}", spoken, meridiem),
        None => spoken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_with_meridiem() {
        assert_eq!(expand_time("3:30pm"), "three thirty pm");
        assert_eq!(expand_time("9:05 AM"), "nine oh five am");
        assert_eq!(expand_time("12:00pm"), "twelve pm");
    }

    #[test]
    fn test_time_without_meridiem() {
        assert_eq!(expand_time("Departure at 14:00."), "Departure at fourteen hundred.");
        assert_eq!(expand_time("0:00"), "zero hundred");
        assert_eq!(expand_time("7:45"), "seven forty-five");
        assert_eq!(expand_time("10:01"), "ten oh one");
    }

    #[test]
    fn test_time_seconds_are_dropped() {
        assert_eq!(expand_time("10:15:30"), "ten fifteen");
    }

    #[test]
    fn test_time_ranges() {
        assert_eq!(
            expand_time("open 14:00-16:00 daily"),
            "open fourteen hundred to sixteen hundred daily"
        );
        assert_eq!(
            expand_time("9:30am - 11:05am"),
            "nine thirty am to eleven oh five am"
        );
        assert_eq!(expand_time("1:00-2:30pm"), "one hundred to two thirty pm");
    }

    #[test]
    fn test_time_ignores_scores_and_words() {
        assert_eq!(expand_time("The final score was 3:0."), "The final score was 3:0.");
        assert_eq!(expand_time("3:30 amazing"), "three thirty amazing");
    }
}
