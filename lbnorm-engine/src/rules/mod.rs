//! Normalization rule tables
//!
//! Phone labels, letter names, month names, units and the other surface
//! vocabulary the rewrite passes match against, loaded from TOML.

pub(crate) mod config;
mod loader;
mod runtime;

pub use runtime::{CountNoun, RuleSet, Unit};
