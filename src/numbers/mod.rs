//! Number Words
//!
//! Converts integers, decimal literals, ordinals and roman numerals into
//! spoken English. Every expander builds on these.

pub mod ordinal;
pub mod roman;
pub mod words;

pub use ordinal::ordinal;
pub use roman::roman_to_int;
pub use words::{
    digits_to_words, float_to_words, float_value_to_words, integer_to_words,
    DEFAULT_DECIMAL_SEPARATOR,
};
