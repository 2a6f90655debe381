//! Error types for the numeral grammar

use thiserror::Error;

/// Errors raised by the numeral and formatter APIs
///
/// The normalization pipeline never surfaces these; a pass that cannot
/// spell a match keeps it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Magnitude outside the grammar's domain
    #[error("number {value} is out of range (must be below {limit})")]
    Range {
        /// The rejected value, as written
        value: String,
        /// The exclusive scale ceiling
        limit: String,
    },

    /// Ordinal requested for a negative or fractional value
    #[error("cannot form an ordinal from {value}")]
    OrdinalRange {
        /// The rejected value, as written
        value: String,
    },

    /// Currency code missing from the lexicon
    #[error("currency '{code}' not supported")]
    UnsupportedCurrency {
        /// The requested currency code
        code: String,
    },

    /// Textual input that is not a number after separator normalization
    #[error("cannot interpret '{input}' as a number")]
    Parse {
        /// The original input
        input: String,
    },

    /// Lexicon could not be loaded or failed validation
    #[error("invalid lexicon: {0}")]
    Configuration(String),
}

/// Result type for numeral operations
pub type Result<T> = std::result::Result<T, NumeralError>;
