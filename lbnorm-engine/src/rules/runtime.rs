//! Runtime rule set compiled from configuration

use super::config::RuleConfig;
use lbnorm_core::Gender;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A noun counted by a preceding number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountNoun {
    /// Form used with a count of one
    pub singular: String,
    /// Form used with any other count
    pub plural: String,
    /// Selects the article at one and the dual at two
    pub gender: Gender,
}

/// A unit written after a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Surface form in the text ("kg", "°", "Stonnen")
    pub token: String,
    /// Spoken noun
    pub noun: CountNoun,
}

/// Immutable normalization vocabulary for one language
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) code: String,
    pub(crate) name: String,

    pub(crate) phone_labels: Vec<String>,

    pub(crate) letter_separator: String,
    pub(crate) letters: HashMap<char, String>,
    pub(crate) pronounced: HashSet<String>,

    pub(crate) score_connector: String,

    pub(crate) date_articles: Vec<String>,
    pub(crate) ordinal_articles: Vec<String>,
    pub(crate) months: Vec<String>,
    /// Month names and aliases to month numbers (1-based)
    pub(crate) month_lookup: HashMap<String, u32>,

    pub(crate) hour_word: String,
    pub(crate) one_hour: String,
    pub(crate) max_hour: u32,

    pub(crate) group_separators: Vec<char>,
    pub(crate) large_words: Vec<CountNoun>,

    pub(crate) units: Vec<Unit>,
    pub(crate) currency_symbols: BTreeMap<String, String>,

    pub(crate) year_suffix: String,
}

impl RuleSet {
    /// Create from configuration
    pub(crate) fn from_config(config: &RuleConfig) -> Result<Self, String> {
        config.validate()?;

        let mut month_lookup = HashMap::new();
        for (index, month) in config.dates.months.iter().enumerate() {
            let number = index as u32 + 1;
            month_lookup.insert(month.name.clone(), number);
            for alias in &month.aliases {
                month_lookup.insert(alias.clone(), number);
            }
        }

        let letters = config
            .abbreviations
            .letters
            .iter()
            .filter_map(|(letter, name)| letter.chars().next().map(|c| (c, name.clone())))
            .collect();

        // Longer tokens first so that "°C" wins over "°"
        let mut units: Vec<Unit> = config
            .units
            .iter()
            .map(|unit| Unit {
                token: unit.token.clone(),
                noun: CountNoun {
                    singular: unit.singular.clone().unwrap_or_else(|| unit.noun.clone()),
                    plural: unit.noun.clone(),
                    gender: unit.gender,
                },
            })
            .collect();
        units.sort_by(|a, b| b.token.chars().count().cmp(&a.token.chars().count()));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            phone_labels: config.phone.labels.clone(),
            letter_separator: config.abbreviations.separator.clone(),
            letters,
            pronounced: config.abbreviations.pronounced.iter().cloned().collect(),
            score_connector: config.score.connector.clone(),
            date_articles: by_length(&config.dates.articles),
            ordinal_articles: by_length(&config.dates.ordinal_articles),
            months: config.dates.months.iter().map(|m| m.name.clone()).collect(),
            month_lookup,
            hour_word: config.time.hour_word.clone(),
            one_hour: config.time.one_hour.clone(),
            max_hour: config.time.max_hour,
            group_separators: config
                .large_numbers
                .separators
                .iter()
                .filter_map(|s| s.chars().next())
                .collect(),
            large_words: config
                .large_numbers
                .words
                .iter()
                .map(|w| CountNoun {
                    singular: w.singular.clone(),
                    plural: w.plural.clone(),
                    gender: w.gender,
                })
                .collect(),
            units,
            currency_symbols: config.currency.symbols.clone(),
            year_suffix: config.year_suffix.suffix.clone(),
        })
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full name of month `number` (1-based)
    pub fn month_name(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.months.get(index).map(String::as_str)
    }

    /// Month number of a month name or alias
    pub fn month_number(&self, word: &str) -> Option<u32> {
        self.month_lookup.get(word).copied()
    }

    /// Month names and aliases, longest first
    pub fn month_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.month_lookup.keys().map(String::as_str).collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words
    }

    /// Units, longest token first
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Currency code for a symbol or code as written ("€" → "EUR")
    pub fn currency_code(&self, symbol: &str) -> Option<&str> {
        self.currency_symbols.get(symbol).map(String::as_str)
    }
}

fn by_length(words: &[String]) -> Vec<String> {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    sorted
}
