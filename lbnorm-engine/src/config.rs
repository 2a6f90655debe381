//! Normalizer configuration and builder

use crate::error::{EngineError, Result};
use crate::normalizer::Normalizer;
use crate::pass::PassId;
use crate::rules::RuleSet;
use lbnorm_core::{CurrencyOptions, Lexicon};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Normalizer configuration
///
/// Unset tables fall back to the built-in Luxembourgish data.
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Numeral lexicon override
    pub lexicon: Option<Arc<Lexicon>>,
    /// Rule table override
    pub rules: Option<Arc<RuleSet>>,
    /// Passes left out of every pipeline
    pub disabled: BTreeSet<PassId>,
    /// Options for amounts read by the currency pass
    pub currency_options: CurrencyOptions,
}

/// Builder for [`Normalizer`]
#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    config: NormalizerConfig,
    lexicon_file: Option<PathBuf>,
    rules_file: Option<PathBuf>,
    disabled_names: Vec<String>,
}

impl NormalizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom lexicon
    pub fn lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.config.lexicon = Some(lexicon);
        self
    }

    /// Load the lexicon from a TOML file at build time
    pub fn lexicon_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.lexicon_file = Some(path.into());
        self
    }

    /// Use a custom rule set
    pub fn rules(mut self, rules: Arc<RuleSet>) -> Self {
        self.config.rules = Some(rules);
        self
    }

    /// Load the rule set from a TOML file at build time
    pub fn rules_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Leave a pass out
    pub fn disable(mut self, pass: PassId) -> Self {
        self.config.disabled.insert(pass);
        self
    }

    /// Leave a pass out by name ("ordinal-date"); unknown names fail the build
    pub fn disable_named<S: Into<String>>(mut self, name: S) -> Self {
        self.disabled_names.push(name.into());
        self
    }

    /// Set currency rendering options
    pub fn currency_options(mut self, options: CurrencyOptions) -> Self {
        self.config.currency_options = options;
        self
    }

    /// Resolve files and pass names into a configuration
    pub fn build_config(self) -> Result<NormalizerConfig> {
        let mut config = self.config;

        for name in &self.disabled_names {
            config.disabled.insert(name.parse::<PassId>()?);
        }

        if let Some(path) = self.lexicon_file {
            let lexicon = Lexicon::from_file(&path).map_err(|e| EngineError::ConfigurationFile {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            config.lexicon = Some(Arc::new(lexicon));
        }

        if let Some(path) = self.rules_file {
            config.rules = Some(Arc::new(RuleSet::from_file(&path)?));
        }

        Ok(config)
    }

    /// Build the normalizer
    pub fn build(self) -> Result<Normalizer> {
        Normalizer::with_config(self.build_config()?)
    }
}
