//! Configuration structures and validation
//!
//! This module defines the TOML schema for a numeral lexicon.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub phonology: Phonology,
    pub articles: Articles,
    pub cardinal: Cardinal,
    pub ordinal: Ordinal,
    pub year: Year,
    pub percentage: Percentage,
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyConfig>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub revision: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phonology {
    pub n_retaining_initials: String,
}

/// Indefinite article forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Articles {
    pub masculine: String,
    pub masculine_reduced: String,
    pub feminine: String,
    pub feminine_dual: String,
}

/// Cardinal register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cardinal {
    pub negative_word: String,
    pub point_word: String,
    pub compound_one: String,
    pub joiner: String,
    pub joiner_reduced: String,
    pub mid_scales: Vec<u64>,
    pub exceptions: BTreeMap<String, String>,
    #[serde(default)]
    pub scales: Vec<ScaleConfig>,
}

/// A power-of-ten scale word from one million upwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub exponent: u32,
    pub singular: String,
    pub plural: String,
    pub gender: Gender,
}

/// Ordinal register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ordinal {
    pub ending: String,
    #[serde(default)]
    pub suffixes: Vec<SuffixRule>,
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub from: String,
    pub to: String,
}

/// Year register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Year {
    pub hundred_word: String,
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Percentage {
    pub noun: String,
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

/// Major and minor unit nouns of one currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub major: NounConfig,
    pub minor: NounConfig,
}

/// A countable noun with its agreement features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounConfig {
    pub singular: String,
    pub plural: String,
    pub gender: Gender,
    /// Lexicalised singular article, overriding the phonological rule
    pub article: Option<String>,
}

/// Grammatical gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// de Euro
    Masculine,
    /// d'Mark
    Feminine,
    /// d'Pond
    Neuter,
}

/// Largest exponent whose thousandfold still fits in `u128`
const MAX_SCALE_EXPONENT: u32 = 35;

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Lexicon code must not be empty".to_string());
        }

        if self.phonology.n_retaining_initials.is_empty() {
            return Err("No n-retaining initials defined".to_string());
        }

        for key in self
            .cardinal
            .exceptions
            .keys()
            .chain(self.ordinal.exceptions.keys())
            .chain(self.year.exceptions.keys())
            .chain(self.percentage.exceptions.keys())
        {
            if key.parse::<u128>().is_err() {
                return Err(format!("Exception key '{key}' is not a non-negative integer"));
            }
        }

        for n in 0..=20 {
            if !self.cardinal.exceptions.contains_key(&n.to_string()) {
                return Err(format!("Missing cardinal form for {n}"));
            }
        }

        for scale in &self.cardinal.mid_scales {
            if !self.cardinal.exceptions.contains_key(&scale.to_string()) {
                return Err(format!("Scale {scale} has no cardinal form"));
            }
        }

        let mut previous = 3;
        for scale in &self.cardinal.scales {
            if scale.exponent <= previous || scale.exponent > MAX_SCALE_EXPONENT {
                return Err(format!(
                    "Scale exponents must be ascending between 4 and {MAX_SCALE_EXPONENT}, got {}",
                    scale.exponent
                ));
            }
            if scale.singular.is_empty() || scale.plural.is_empty() {
                return Err(format!("Scale 10^{} has an empty word", scale.exponent));
            }
            previous = scale.exponent;
        }

        if self
            .ordinal
            .suffixes
            .iter()
            .any(|rule| rule.from.is_empty())
        {
            return Err("Ordinal suffix rules must not have an empty pattern".to_string());
        }

        for code in self.currencies.keys() {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(format!("Invalid currency code '{code}'"));
            }
        }

        Ok(())
    }
}
