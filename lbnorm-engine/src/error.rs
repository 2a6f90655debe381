//! Layered error types

use lbnorm_core::NumeralError;
use thiserror::Error;

/// Engine-level errors
///
/// Normalizing text never fails; these come from building a normalizer or
/// loading rule tables.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Numeral grammar error
    #[error("numeral error: {0}")]
    Numeral(#[from] NumeralError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Configuration error with path information
    #[error("configuration error in {path}: {error}")]
    ConfigurationFile {
        /// The configuration file path
        path: String,
        /// The specific error that occurred
        error: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
