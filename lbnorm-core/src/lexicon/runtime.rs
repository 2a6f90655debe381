//! Runtime lexicon
//!
//! Compiles a validated [`LexiconConfig`] into lookup tables keyed by value.

use super::config::{Gender, LexiconConfig, NounConfig};
use std::collections::BTreeMap;

/// A scale word used by the decomposition algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    /// Threshold value (20, 30, …, 100, 1000, 10^6, …)
    pub value: u128,
    /// Singular form
    pub singular: String,
    /// Plural form, used after a multiplier greater than one
    pub plural: String,
    /// Grammatical gender, selects the singular article
    pub gender: Gender,
    /// Whether the word is written as a separate, inflecting noun
    /// (millions and above) rather than compounded solid
    pub separate: bool,
}

/// A countable noun with its agreement features
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    /// Singular form
    pub singular: String,
    /// Plural form
    pub plural: String,
    /// Grammatical gender
    pub gender: Gender,
    /// Lexicalised singular article, if the phonological rule does not apply
    pub article: Option<String>,
}

impl From<&NounConfig> for Noun {
    fn from(config: &NounConfig) -> Self {
        Self {
            singular: config.singular.clone(),
            plural: config.plural.clone(),
            gender: config.gender,
            article: config.article.clone(),
        }
    }
}

/// Major and minor unit nouns of a currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,
    /// Main unit (Euro)
    pub major: Noun,
    /// Hundredth unit (Cent)
    pub minor: Noun,
}

/// Immutable lexical tables for one language
///
/// Every irregular form lives in a per-register exception map that is
/// consulted before any generative rule.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) revision: u32,

    pub(crate) n_retaining: Vec<char>,
    pub(crate) masculine_article: String,
    pub(crate) masculine_article_reduced: String,
    pub(crate) feminine_article: String,
    pub(crate) feminine_dual: String,

    pub(crate) negative_word: String,
    pub(crate) point_word: String,
    pub(crate) compound_one: String,
    pub(crate) joiner: String,
    pub(crate) joiner_reduced: String,
    pub(crate) cardinals: BTreeMap<u128, String>,
    /// Descending by value
    pub(crate) scales: Vec<Scale>,
    pub(crate) ceiling: u128,

    pub(crate) ordinal_ending: String,
    pub(crate) ordinal_suffixes: Vec<(String, String)>,
    pub(crate) ordinals: BTreeMap<u128, String>,

    pub(crate) year_hundred: String,
    pub(crate) years: BTreeMap<u128, String>,

    pub(crate) percent_noun: String,
    pub(crate) percentages: BTreeMap<u128, String>,

    pub(crate) currencies: BTreeMap<String, Currency>,
}

fn numeric_keys(table: &BTreeMap<String, String>) -> Result<BTreeMap<u128, String>, String> {
    table
        .iter()
        .map(|(key, word)| {
            key.parse::<u128>()
                .map(|n| (n, word.clone()))
                .map_err(|_| format!("Exception key '{key}' is not a non-negative integer"))
        })
        .collect()
}

impl Lexicon {
    /// Create from configuration
    pub(crate) fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let cardinals = numeric_keys(&config.cardinal.exceptions)?;

        let mut scales: Vec<Scale> = Vec::new();
        for high in config.cardinal.scales.iter().rev() {
            scales.push(Scale {
                value: 10u128.pow(high.exponent),
                singular: high.singular.clone(),
                plural: high.plural.clone(),
                gender: high.gender,
                separate: true,
            });
        }
        let mut mid: Vec<u128> = config.cardinal.mid_scales.iter().map(|&v| v as u128).collect();
        mid.sort_unstable_by(|a, b| b.cmp(a));
        for value in mid {
            // validate() guarantees every mid scale has a cardinal form
            let word = cardinals.get(&value).cloned().unwrap_or_default();
            scales.push(Scale {
                value,
                singular: word.clone(),
                plural: word,
                gender: Gender::Neuter,
                separate: false,
            });
        }

        let ceiling = scales
            .first()
            .map(|top| top.value.saturating_mul(1000))
            .unwrap_or(1_000_000);

        let currencies = config
            .currencies
            .iter()
            .map(|(code, forms)| {
                (
                    code.clone(),
                    Currency {
                        code: code.clone(),
                        major: Noun::from(&forms.major),
                        minor: Noun::from(&forms.minor),
                    },
                )
            })
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            revision: config.metadata.revision,
            n_retaining: config
                .phonology
                .n_retaining_initials
                .chars()
                .flat_map(char::to_lowercase)
                .collect(),
            masculine_article: config.articles.masculine.clone(),
            masculine_article_reduced: config.articles.masculine_reduced.clone(),
            feminine_article: config.articles.feminine.clone(),
            feminine_dual: config.articles.feminine_dual.clone(),
            negative_word: config.cardinal.negative_word.clone(),
            point_word: config.cardinal.point_word.clone(),
            compound_one: config.cardinal.compound_one.clone(),
            joiner: config.cardinal.joiner.clone(),
            joiner_reduced: config.cardinal.joiner_reduced.clone(),
            cardinals,
            scales,
            ceiling,
            ordinal_ending: config.ordinal.ending.clone(),
            ordinal_suffixes: config
                .ordinal
                .suffixes
                .iter()
                .map(|rule| (rule.from.clone(), rule.to.clone()))
                .collect(),
            ordinals: numeric_keys(&config.ordinal.exceptions)?,
            year_hundred: config.year.hundred_word.clone(),
            years: numeric_keys(&config.year.exceptions)?,
            percent_noun: config.percentage.noun.clone(),
            percentages: numeric_keys(&config.percentage.exceptions)?,
            currencies,
        })
    }

    /// Language code ("lb")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revision of the lexical tables
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Exclusive upper bound of spellable magnitudes
    pub fn ceiling(&self) -> u128 {
        self.ceiling
    }

    /// Word for negative numbers
    pub fn negative_word(&self) -> &str {
        &self.negative_word
    }

    /// Decimal point word
    pub fn point_word(&self) -> &str {
        &self.point_word
    }

    /// Tabulated cardinal form, if any
    pub fn cardinal_exception(&self, value: u128) -> Option<&str> {
        self.cardinals.get(&value).map(String::as_str)
    }

    /// Tabulated ordinal form, if any
    pub fn ordinal_exception(&self, value: u128) -> Option<&str> {
        self.ordinals.get(&value).map(String::as_str)
    }

    /// Tabulated year form, if any
    pub fn year_exception(&self, value: u128) -> Option<&str> {
        self.years.get(&value).map(String::as_str)
    }

    /// Tabulated percentage phrase, if any
    pub fn percentage_exception(&self, value: u128) -> Option<&str> {
        self.percentages.get(&value).map(String::as_str)
    }

    /// Scale words, largest first
    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    /// The separate scale noun (Millioun, Milliard, …) with this value
    pub fn scale_noun(&self, value: u128) -> Option<&Scale> {
        self.scales.iter().find(|s| s.separate && s.value == value)
    }

    /// The largest separate scale noun not above `value`
    pub fn scale_noun_below(&self, value: u128) -> Option<&Scale> {
        self.scales.iter().find(|s| s.separate && s.value <= value)
    }

    /// Percentage noun ("Prozent")
    pub fn percent_noun(&self) -> &str {
        &self.percent_noun
    }

    /// Currency forms by ISO code
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    /// Supported currency codes
    pub fn currency_codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }
}
