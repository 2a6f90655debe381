//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use lbnorm_core::CurrencyOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Normalization configuration
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Normalization-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Passes to switch off, by name ("time", "bare-number", ...)
    pub skip_passes: Vec<String>,

    /// Custom lexicon file
    pub lexicon: Option<PathBuf>,

    /// Custom rule table file
    pub rules: Option<PathBuf>,

    /// Spell the cent count of money amounts
    pub spell_minor: bool,

    /// Read "null Euro" before a cent-only amount
    pub always_show_major: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            skip_passes: Vec::new(),
            lexicon: None,
            rules: None,
            spell_minor: true,
            always_show_major: false,
        }
    }
}

impl NormalizeConfig {
    /// Currency rendering options
    pub fn currency_options(&self) -> CurrencyOptions {
        CurrencyOptions {
            spell_minor: self.spell_minor,
            always_show_major: self.always_show_major,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// Relative data file paths are resolved against the directory of the
    /// configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for file in [&mut config.normalize.lexicon, &mut config.normalize.rules]
            .into_iter()
            .flatten()
        {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
