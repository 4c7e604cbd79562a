//! Pipeline Configuration
//!
//! Pass toggles and the values passes read, stored as JSON in the user
//! config directory.

use crate::error::{NormResult, NormalizeError};
use crate::numbers::DEFAULT_DECIMAL_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Unicode normalization form applied by the unicode pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnicodeForm {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// Which passes run, and the few values they read
///
/// Pass order is fixed by the pipeline; this only switches passes on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    // Cleaners
    pub normalize_unicode: bool,
    pub remove_html: bool,
    pub remove_urls: bool,
    pub remove_emails: bool,
    pub remove_hashtags: bool,
    pub remove_mentions: bool,
    pub expand_contractions: bool,

    // Expanders
    pub expand_ip_addresses: bool,
    pub normalize_leading_decimals: bool,
    pub expand_currency: bool,
    pub expand_percentages: bool,
    pub expand_scientific_notation: bool,
    pub expand_time: bool,
    pub expand_ordinals: bool,
    pub expand_units: bool,
    pub expand_scale_suffixes: bool,
    pub expand_fractions: bool,
    pub expand_decades: bool,
    pub expand_phone_numbers: bool,
    pub expand_ranges: bool,
    pub expand_model_names: bool,
    pub expand_roman_numerals: bool,
    pub replace_numbers: bool,
    pub replace_floats: bool,

    // Finalization
    pub remove_accents: bool,
    pub remove_punctuation: bool,
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub remove_extra_whitespace: bool,

    // Data
    pub unicode_form: UnicodeForm,
    pub decimal_separator: String,
    /// Overrides the built-in English stopword set when present
    pub stopwords: Option<BTreeSet<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            remove_html: true,
            remove_urls: true,
            remove_emails: true,
            remove_hashtags: false,
            remove_mentions: false,
            expand_contractions: true,

            expand_ip_addresses: true,
            normalize_leading_decimals: true,
            expand_currency: true,
            expand_percentages: true,
            expand_scientific_notation: true,
            expand_time: true,
            expand_ordinals: true,
            expand_units: true,
            expand_scale_suffixes: true,
            expand_fractions: true,
            expand_decades: true,
            expand_phone_numbers: true,
            expand_ranges: true,
            expand_model_names: true,
            expand_roman_numerals: false,
            replace_numbers: true,
            replace_floats: true,

            remove_accents: false,
            remove_punctuation: true,
            lowercase: true,
            remove_stopwords: false,
            remove_extra_whitespace: true,

            unicode_form: UnicodeForm::Nfc,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR.to_string(),
            stopwords: None,
        }
    }
}

impl PipelineConfig {
    /// Check values that the type system can't
    pub fn validate(&self) -> NormResult<()> {
        let separator = self.decimal_separator.trim();
        if separator.is_empty() {
            return Err(NormalizeError::Config(
                "decimal_separator must not be empty".to_string(),
            ));
        }
        if separator.split_whitespace().count() > 1 || separator != self.decimal_separator {
            return Err(NormalizeError::Config(format!(
                "decimal_separator must be a single word, got {:?}",
                self.decimal_separator
            )));
        }
        Ok(())
    }

    /// Load config from the user config directory, or fall back to defaults
    pub fn load() -> NormResult<Self> {
        Self::load_or_default(&config_path())
    }

    /// Load config from `path`. A missing file gives the defaults; a broken
    /// one is moved aside to `*.json.corrupt` and also gives the defaults.
    pub fn load_or_default(path: &Path) -> NormResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match Self::parse(&content) {
            Ok(config) => {
                info!("Loaded pipeline config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                // Graceful degradation: keep the broken file around for debugging
                warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                if let Err(e) = std::fs::rename(path, &backup_path) {
                    warn!(
                        "Could not move corrupt config to {}: {}",
                        backup_path.display(),
                        e
                    );
                }
                Ok(Self::default())
            }
        }
    }

    /// Load config from an explicit path. Unlike [`PipelineConfig::load`],
    /// a broken file is an error.
    pub fn from_file(path: &Path) -> NormResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Save config to the user config directory
    pub fn save(&self) -> NormResult<()> {
        self.save_to(&config_path())
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> NormResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("💾 Saved pipeline config to {}", path.display());
        Ok(())
    }

    fn parse(content: &str) -> NormResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("speaktext")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.lowercase);
        assert!(config.replace_numbers);
        assert!(config.expand_phone_numbers);
        assert!(!config.expand_roman_numerals);
        assert!(!config.remove_hashtags);
        assert!(!config.remove_mentions);
        assert!(!config.remove_stopwords);
        assert!(!config.remove_accents);
        assert_eq!(config.decimal_separator, "point");
        assert_eq!(config.unicode_form, UnicodeForm::Nfc);
        assert!(config.stopwords.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = PipelineConfig::default();
        config.expand_roman_numerals = true;
        config.stopwords = Some(BTreeSet::from(["um".to_string()]));
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: PipelineConfig = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"lowercase": false, "unicode_form": "NFKC"}"#)
                .expect("Failed to deserialize");
        assert!(!config.lowercase);
        assert_eq!(config.unicode_form, UnicodeForm::Nfkc);
        assert!(config.expand_currency);
    }

    #[test]
    fn test_validate_decimal_separator() {
        let mut config = PipelineConfig::default();
        assert!(config.validate().is_ok());

        config.decimal_separator = "dot".to_string();
        assert!(config.validate().is_ok());

        config.decimal_separator = "".to_string();
        assert!(matches!(config.validate(), Err(NormalizeError::Config(_))));

        config.decimal_separator = "decimal point".to_string();
        assert!(matches!(config.validate(), Err(NormalizeError::Config(_))));
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let result = PipelineConfig::parse("{ not valid json");
        assert!(matches!(result, Err(NormalizeError::Json(_))));
    }
}
