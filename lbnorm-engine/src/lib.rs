//! Luxembourgish text normalization for speech synthesis
//!
//! Rewrites the numerals in free text into words through an explicit,
//! ordered list of rewrite passes: telephone numbers, money amounts,
//! acronyms, match scores, dates, clock times, grouped numbers, units,
//! suffixed years, decimals and finally any remaining digits.
//!
//! ```
//! use lbnorm_engine::Normalizer;
//!
//! let normalizer = Normalizer::new().unwrap();
//! assert_eq!(
//!     normalizer.normalize("den 30. Abrëll 2010"),
//!     "den drëssegsten Abrëll zweedausendzéng"
//! );
//! assert_eq!(normalizer.normalize("17:58"), "siwwenzéng Auer aachtafofzeg");
//! ```
//!
//! Each pass can be switched off by name:
//!
//! ```
//! use lbnorm_engine::{Normalizer, PassId};
//!
//! let normalizer = Normalizer::builder()
//!     .disable(PassId::Phone)
//!     .build()
//!     .unwrap();
//! assert!(!normalizer.passes().contains(&PassId::Phone));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod normalizer;
pub mod pass;
mod passes;
pub mod pipeline;
pub mod rules;

pub use config::{NormalizerBuilder, NormalizerConfig};
pub use error::{EngineError, Result};
pub use normalizer::Normalizer;
pub use pass::{PassId, RewritePass};
pub use pipeline::{PassTrace, STANDARD_ORDER, UNIT_ORDER};
pub use rules::RuleSet;

use std::sync::OnceLock;

static DEFAULT: OnceLock<std::result::Result<Normalizer, String>> = OnceLock::new();

fn default_normalizer() -> Result<&'static Normalizer> {
    DEFAULT
        .get_or_init(|| Normalizer::new().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| EngineError::Configuration(e.clone()))
}

/// Normalize text with the built-in Luxembourgish tables
///
/// # Errors
///
/// Only if the built-in tables fail to load.
pub fn normalize(text: &str) -> Result<String> {
    Ok(default_normalizer()?.normalize(text))
}

/// Spell grouped numbers, units and suffixed years with the built-in tables
pub fn to_unit(text: &str) -> Result<String> {
    Ok(default_normalizer()?.to_unit(text))
}
