//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures; everything else travels as `anyhow::Error`
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    FileNotFound(String),
    /// Malformed glob pattern
    InvalidPattern(String),
    /// Unreadable or malformed CLI configuration
    ConfigError(String),
    /// A lexicon or rule file did not pass validation
    ValidationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(pattern) => write!(f, "No files found matching: {pattern}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
