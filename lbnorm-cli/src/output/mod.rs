//! Output formatting module

use anyhow::Result;
use lbnorm_engine::PassTrace;
use serde::Serialize;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One normalized input
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedDocument {
    /// File path, or "-" for standard input
    pub source: String,
    /// Normalized text
    pub text: String,
    /// Text after every pass, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<PassTrace>>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single document
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON array)
    fn finish(&mut self) -> Result<()>;
}
