//! Numeral lexicon
//!
//! All lexical tables (cardinal, ordinal and year exceptions, scale words,
//! currency nouns) are loaded from TOML once and shared read-only.

pub(crate) mod config;
mod loader;
mod runtime;

pub use config::Gender;
pub use runtime::{Currency, Lexicon, Noun, Scale};
