//! Normalization Pipeline
//!
//! Runs the cleaners and expanders over a text in one fixed order. The
//! config only switches passes on and off, it never reorders them: several
//! passes rely on an earlier one having claimed its spans first (phone
//! numbers before ranges, units before scale suffixes, model names before
//! bare numbers).

use crate::cleaners;
use crate::config::PipelineConfig;
use crate::expanders;
use std::fmt;
use tracing::debug;

/// One step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    NormalizeUnicode,
    RemoveHtml,
    RemoveUrls,
    RemoveEmails,
    RemoveHashtags,
    RemoveMentions,
    ExpandContractions,
    ExpandIpAddresses,
    NormalizeLeadingDecimals,
    ExpandCurrency,
    ExpandPercentages,
    ExpandScientificNotation,
    ExpandTime,
    ExpandOrdinals,
    ExpandUnits,
    ExpandScaleSuffixes,
    ExpandFractions,
    ExpandDecades,
    ExpandPhoneNumbers,
    ExpandRanges,
    ExpandModelNames,
    ExpandRomanNumerals,
    ReplaceNumbers,
    RemoveAccents,
    RemovePunctuation,
    Lowercase,
    RemoveStopwords,
    CollapseWhitespace,
}

/// Every pass, in the order they run
pub const PASS_ORDER: [Pass; 28] = [
    Pass::NormalizeUnicode,
    Pass::RemoveHtml,
    Pass::RemoveUrls,
    Pass::RemoveEmails,
    Pass::RemoveHashtags,
    Pass::RemoveMentions,
    Pass::ExpandContractions,
    Pass::ExpandIpAddresses,
    Pass::NormalizeLeadingDecimals,
    Pass::ExpandCurrency,
    Pass::ExpandPercentages,
    Pass::ExpandScientificNotation,
    Pass::ExpandTime,
    Pass::ExpandOrdinals,
    Pass::ExpandUnits,
    Pass::ExpandScaleSuffixes,
    Pass::ExpandFractions,
    Pass::ExpandDecades,
    Pass::ExpandPhoneNumbers,
    Pass::ExpandRanges,
    Pass::ExpandModelNames,
    Pass::ExpandRomanNumerals,
    Pass::ReplaceNumbers,
    Pass::RemoveAccents,
    Pass::RemovePunctuation,
    Pass::Lowercase,
    Pass::RemoveStopwords,
    Pass::CollapseWhitespace,
];

impl Pass {
    /// Name of the config option that toggles this pass
    pub fn name(self) -> &'static str {
        match self {
            Pass::NormalizeUnicode => "normalize_unicode",
            Pass::RemoveHtml => "remove_html",
            Pass::RemoveUrls => "remove_urls",
            Pass::RemoveEmails => "remove_emails",
            Pass::RemoveHashtags => "remove_hashtags",
            Pass::RemoveMentions => "remove_mentions",
            Pass::ExpandContractions => "expand_contractions",
            Pass::ExpandIpAddresses => "expand_ip_addresses",
            Pass::NormalizeLeadingDecimals => "normalize_leading_decimals",
            Pass::ExpandCurrency => "expand_currency",
            Pass::ExpandPercentages => "expand_percentages",
            Pass::ExpandScientificNotation => "expand_scientific_notation",
            Pass::ExpandTime => "expand_time",
            Pass::ExpandOrdinals => "expand_ordinals",
            Pass::ExpandUnits => "expand_units",
            Pass::ExpandScaleSuffixes => "expand_scale_suffixes",
            Pass::ExpandFractions => "expand_fractions",
            Pass::ExpandDecades => "expand_decades",
            Pass::ExpandPhoneNumbers => "expand_phone_numbers",
            Pass::ExpandRanges => "expand_ranges",
            Pass::ExpandModelNames => "expand_model_names",
            Pass::ExpandRomanNumerals => "expand_roman_numerals",
            Pass::ReplaceNumbers => "replace_numbers",
            Pass::RemoveAccents => "remove_accents",
            Pass::RemovePunctuation => "remove_punctuation",
            Pass::Lowercase => "lowercase",
            Pass::RemoveStopwords => "remove_stopwords",
            Pass::CollapseWhitespace => "remove_extra_whitespace",
        }
    }

    pub fn is_enabled(self, config: &PipelineConfig) -> bool {
        match self {
            Pass::NormalizeUnicode => config.normalize_unicode,
            Pass::RemoveHtml => config.remove_html,
            Pass::RemoveUrls => config.remove_urls,
            Pass::RemoveEmails => config.remove_emails,
            Pass::RemoveHashtags => config.remove_hashtags,
            Pass::RemoveMentions => config.remove_mentions,
            Pass::ExpandContractions => config.expand_contractions,
            Pass::ExpandIpAddresses => config.expand_ip_addresses,
            Pass::NormalizeLeadingDecimals => config.normalize_leading_decimals,
            Pass::ExpandCurrency => config.expand_currency,
            Pass::ExpandPercentages => config.expand_percentages,
            Pass::ExpandScientificNotation => config.expand_scientific_notation,
            Pass::ExpandTime => config.expand_time,
            Pass::ExpandOrdinals => config.expand_ordinals,
            Pass::ExpandUnits => config.expand_units,
            Pass::ExpandScaleSuffixes => config.expand_scale_suffixes,
            Pass::ExpandFractions => config.expand_fractions,
            Pass::ExpandDecades => config.expand_decades,
            Pass::ExpandPhoneNumbers => config.expand_phone_numbers,
            Pass::ExpandRanges => config.expand_ranges,
            Pass::ExpandModelNames => config.expand_model_names,
            Pass::ExpandRomanNumerals => config.expand_roman_numerals,
            Pass::ReplaceNumbers => config.replace_numbers,
            Pass::RemoveAccents => config.remove_accents,
            Pass::RemovePunctuation => config.remove_punctuation,
            Pass::Lowercase => config.lowercase,
            Pass::RemoveStopwords => config.remove_stopwords,
            Pass::CollapseWhitespace => config.remove_extra_whitespace,
        }
    }

    /// Run this pass alone, whether or not the config enables it
    pub fn apply(self, text: &str, config: &PipelineConfig) -> String {
        let separator = config.decimal_separator.as_str();
        match self {
            Pass::NormalizeUnicode => cleaners::normalize_unicode(text, config.unicode_form),
            Pass::RemoveHtml => cleaners::remove_html_tags(text),
            Pass::RemoveUrls => cleaners::remove_urls(text),
            Pass::RemoveEmails => cleaners::remove_emails(text),
            Pass::RemoveHashtags => cleaners::remove_hashtags(text),
            Pass::RemoveMentions => cleaners::remove_mentions(text),
            Pass::ExpandContractions => cleaners::expand_contractions(text),
            Pass::ExpandIpAddresses => expanders::expand_ip_addresses(text),
            Pass::NormalizeLeadingDecimals => expanders::normalize_leading_decimals(text),
            Pass::ExpandCurrency => expanders::expand_currency_with(text, separator),
            Pass::ExpandPercentages => expanders::expand_percentages_with(text, separator),
            Pass::ExpandScientificNotation => {
                expanders::expand_scientific_notation_with(text, separator)
            }
            Pass::ExpandTime => expanders::expand_time(text),
            Pass::ExpandOrdinals => expanders::expand_ordinals(text),
            Pass::ExpandUnits => expanders::expand_units_with(text, separator),
            Pass::ExpandScaleSuffixes => expanders::expand_scale_suffixes_with(text, separator),
            Pass::ExpandFractions => expanders::expand_fractions(text),
            Pass::ExpandDecades => expanders::expand_decades(text),
            Pass::ExpandPhoneNumbers => expanders::expand_phone_numbers(text),
            Pass::ExpandRanges => expanders::expand_ranges(text),
            Pass::ExpandModelNames => expanders::expand_model_names(text),
            Pass::ExpandRomanNumerals => expanders::expand_roman_numerals(text),
            Pass::ReplaceNumbers => {
                expanders::replace_numbers_with(text, config.replace_floats, separator)
            }
            Pass::RemoveAccents => cleaners::remove_accents(text),
            Pass::RemovePunctuation => cleaners::remove_punctuation(text),
            Pass::Lowercase => cleaners::to_lowercase(text),
            Pass::RemoveStopwords => cleaners::remove_stopwords(text, config.stopwords.as_ref()),
            Pass::CollapseWhitespace => cleaners::remove_extra_whitespace(text),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalizes text for speech synthesis
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    config: PipelineConfig,
}

impl TextNormalizer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The passes this normalizer will run, in order
    pub fn enabled_passes(&self) -> impl Iterator<Item = Pass> + '_ {
        PASS_ORDER
            .into_iter()
            .filter(move |pass| pass.is_enabled(&self.config))
    }

    /// Normalize text into its spoken form
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.config)
    }

    /// Normalize text, keeping the text as it stood after each enabled pass
    pub fn normalize_traced(&self, text: &str) -> Vec<(Pass, String)> {
        let mut steps: Vec<(Pass, String)> = Vec::new();
        let mut current = text.to_string();
        for pass in self.enabled_passes() {
            current = pass.apply(&current, &self.config);
            steps.push((pass, current.clone()));
        }
        steps
    }

    /// Normalize independent chunks in parallel, results in input order
    ///
    /// At most one worker per available core; each worker takes a
    /// contiguous run of chunks.
    pub fn normalize_batch(&self, chunks: &[&str]) -> Vec<String> {
        if chunks.is_empty() {
            return Vec::new();
        }

        let workers = std::thread::available_parallelism()
            .map_or(1, |n| n.get())
            .min(chunks.len());
        let per_worker = chunks.len().div_ceil(workers);
        debug!(
            "Normalizing {} chunks on {} workers",
            chunks.len(),
            workers
        );

        std::thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .chunks(per_worker)
                .map(|run| {
                    scope.spawn(move || {
                        run.iter()
                            .map(|chunk| self.normalize(chunk))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }
}

/// Normalize text with the given config
pub fn normalize(text: &str, config: &PipelineConfig) -> String {
    PASS_ORDER
        .into_iter()
        .filter(|pass| pass.is_enabled(config))
        .fold(text.to_string(), |current, pass| {
            let next = pass.apply(&current, config);
            if next != current {
                debug!("{}: {:?} -> {:?}", pass, current, next);
            }
            next
        })
}
