//! Basic Cleaners
//!
//! Simple, independent passes that strip markup and noise or tidy up
//! the final text. None of them know anything about numbers.

use crate::config::UnicodeForm;
use crate::tables::DEFAULT_STOPWORDS;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref URL: Regex = Regex::new(r"https?://\S+|www\.\S+").expect("url pattern");
    static ref EMAIL: Regex =
        Regex::new(r"(?i)\b[\w.+-]+@[\w-]+\.[a-z]{2,}\b").expect("email pattern");
    static ref HASHTAG: Regex = Regex::new(r"#\w+").expect("hashtag pattern");
    static ref MENTION: Regex = Regex::new(r"@\w+").expect("mention pattern");
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").expect("html pattern");
    // Keeps word characters, whitespace and the marks that shape prosody
    static ref NON_PROSODIC: Regex =
        Regex::new(r"[^\w\s.,?!;:—–…]").expect("punctuation pattern");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern");

    /// Contraction rules, applied in order. Fixed forms come first so the
    /// generic n't rule never sees "can't" or "won't".
    static ref CONTRACTIONS: Vec<(Regex, &'static str)> = [
        (r"(?i)\bcan['’]t\b", "cannot"),
        (r"(?i)\bwon['’]t\b", "will not"),
        (r"(?i)\bshan['’]t\b", "shall not"),
        (r"(?i)\bain['’]t\b", "is not"),
        (r"(?i)\blet['’]s\b", "let us"),
        (r"(?i)\b(\w+)n['’]t\b", "${1} not"),
        (r"(?i)\b(\w+)['’]re\b", "${1} are"),
        (r"(?i)\b(\w+)['’]ve\b", "${1} have"),
        (r"(?i)\b(\w+)['’]ll\b", "${1} will"),
        (r"(?i)\b(\w+)['’]d\b", "${1} would"),
        (r"(?i)\b(\w+)['’]m\b", "${1} am"),
        (r"(?i)\bit['’]s\b", "it is"),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("contraction pattern"), *replacement))
    .collect();
}

/// Apply a unicode normalization form
pub fn normalize_unicode(text: &str, form: UnicodeForm) -> String {
    match form {
        UnicodeForm::Nfc => text.nfc().collect(),
        UnicodeForm::Nfd => text.nfd().collect(),
        UnicodeForm::Nfkc => text.nfkc().collect(),
        UnicodeForm::Nfkd => text.nfkd().collect(),
    }
}

/// Strip diacritics ("café" -> "cafe")
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Replace HTML tags with a space so adjacent words don't merge
pub fn remove_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, " ").into_owned()
}

pub fn remove_urls(text: &str) -> String {
    URL.replace_all(text, "").trim().to_string()
}

pub fn remove_emails(text: &str) -> String {
    EMAIL.replace_all(text, "").trim().to_string()
}

pub fn remove_hashtags(text: &str) -> String {
    HASHTAG.replace_all(text, "").into_owned()
}

pub fn remove_mentions(text: &str) -> String {
    MENTION.replace_all(text, "").into_owned()
}

/// Expand common English contractions ("don't" -> "do not")
pub fn expand_contractions(text: &str) -> String {
    CONTRACTIONS
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

/// Replace non-prosodic symbols with spaces, keeping `. , ? ! ; :` and dashes
pub fn remove_punctuation(text: &str) -> String {
    NON_PROSODIC.replace_all(text, " ").into_owned()
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Drop stopwords, using the built-in English set when `stopwords` is `None`.
/// Comparison is case-insensitive; the result is single-space joined.
pub fn remove_stopwords(text: &str, stopwords: Option<&BTreeSet<String>>) -> String {
    let stopwords = stopwords.unwrap_or(&*DEFAULT_STOPWORDS);
    text.split_whitespace()
        .filter(|token| !stopwords.contains(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse whitespace runs into single spaces and trim the ends
pub fn remove_extra_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unicode_forms() {
        let decomposed = "cafe\u{301}";
        assert_eq!(normalize_unicode(decomposed, UnicodeForm::Nfc), "café");
        assert_eq!(normalize_unicode("café", UnicodeForm::Nfd), decomposed);
        assert_eq!(normalize_unicode("ﬁ", UnicodeForm::Nfkc), "fi");
    }

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("café naïve Ångström"), "cafe naive Angstrom");
    }

    #[test]
    fn test_remove_html_tags() {
        assert_eq!(remove_html_tags("<b>Hello</b>World"), " Hello World");
    }

    #[test]
    fn test_remove_urls_and_emails() {
        assert_eq!(remove_urls("Visit https://example.com/a?b=c now"), "Visit  now");
        assert_eq!(remove_urls("see www.example.org"), "see");
        assert_eq!(remove_emails("mail hello@example.com today"), "mail  today");
    }

    #[test]
    fn test_remove_hashtags_and_mentions() {
        assert_eq!(remove_hashtags("#NLP rocks"), " rocks");
        assert_eq!(remove_mentions("hi @user!"), "hi !");
    }

    #[test]
    fn test_expand_contractions() {
        assert_eq!(expand_contractions("I don't know"), "I do not know");
        assert_eq!(expand_contractions("They've left"), "They have left");
        assert_eq!(expand_contractions("can't won't"), "cannot will not");
        assert_eq!(expand_contractions("Let's go"), "let us go");
        assert_eq!(expand_contractions("I'm sure it's fine"), "I am sure it is fine");
        assert_eq!(expand_contractions("we’ll see"), "we will see");
    }

    #[test]
    fn test_remove_punctuation_keeps_prosody() {
        assert_eq!(
            remove_punctuation("Wait... really? Yes, (maybe) — ok!"),
            "Wait... really? Yes,  maybe  — ok!"
        );
        assert_eq!(remove_punctuation("forty-two"), "forty two");
        assert_eq!(remove_punctuation("a&b"), "a b");
    }

    #[test]
    fn test_remove_stopwords() {
        assert_eq!(remove_stopwords("The cat and the hat", None), "cat hat");

        let custom = BTreeSet::from(["cat".to_string()]);
        assert_eq!(remove_stopwords("The cat and the hat", Some(&custom)), "The and the hat");
    }

    #[test]
    fn test_remove_extra_whitespace() {
        assert_eq!(remove_extra_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(remove_extra_whitespace("   "), "");
    }
}
