//! SpeakText Library
//!
//! Rule-based English text normalization for speech synthesis: numbers,
//! currency, times, units and other written forms become the words a
//! speaker would say.

pub mod cleaners;
pub mod config;
pub mod error;
pub mod expanders;
pub mod numbers;
pub mod pipeline;
pub mod tables;

pub use config::{PipelineConfig, UnicodeForm};
pub use error::{NormResult, NormalizeError};
pub use pipeline::{normalize, Pass, TextNormalizer, PASS_ORDER};
