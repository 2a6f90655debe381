//! Configuration structures and validation
//!
//! This module defines the TOML schema for normalization rule tables.

use lbnorm_core::Gender;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    pub phone: Phone,
    pub abbreviations: Abbreviations,
    pub score: Score,
    pub dates: Dates,
    pub time: Time,
    pub large_numbers: LargeNumbers,
    #[serde(default)]
    pub units: Vec<UnitConfig>,
    pub currency: CurrencySymbols,
    pub year_suffix: YearSuffix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    pub labels: Vec<String>,
}

/// Acronym handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub pronounced: Vec<String>,
    pub letters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub connector: String,
}

/// Date vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dates {
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(default)]
    pub ordinal_articles: Vec<String>,
    pub months: Vec<MonthConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Clock times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Time {
    pub hour_word: String,
    pub one_hour: String,
    #[serde(default = "default_max_hour")]
    pub max_hour: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargeNumbers {
    pub separators: Vec<String>,
    #[serde(default)]
    pub words: Vec<CountNounConfig>,
}

/// A noun counted by a preceding number ("Milliarden")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountNounConfig {
    pub singular: String,
    pub plural: String,
    pub gender: Gender,
}

/// A unit written after a number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    pub token: String,
    pub noun: String,
    pub singular: Option<String>,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySymbols {
    pub symbols: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSuffix {
    pub suffix: String,
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_max_hour() -> u32 {
    24
}

impl RuleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rule set code must not be empty".to_string());
        }

        if self.dates.months.len() != 12 {
            return Err(format!(
                "Expected 12 months, found {}",
                self.dates.months.len()
            ));
        }

        for (letter, name) in &self.abbreviations.letters {
            if letter.chars().count() != 1 || !letter.chars().all(char::is_uppercase) {
                return Err(format!("Letter key '{letter}' must be one uppercase letter"));
            }
            if name.is_empty() {
                return Err(format!("Letter '{letter}' has no name"));
            }
        }

        if self.time.hour_word.trim().is_empty() {
            return Err("Hour word must not be empty".to_string());
        }

        if self.large_numbers.separators.iter().any(|s| s.chars().count() != 1) {
            return Err("Thousands separators must be single characters".to_string());
        }

        if let Some(unit) = self.units.iter().find(|u| u.token.is_empty() || u.noun.is_empty()) {
            return Err(format!("Unit '{}' has an empty token or noun", unit.token));
        }

        if self.year_suffix.suffix.is_empty() {
            return Err("Year suffix must not be empty".to_string());
        }

        Ok(())
    }
}
