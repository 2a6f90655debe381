//! Text normalizer
//!
//! Owns the shared numeral services and rule tables plus the two compiled
//! pipelines. Immutable after construction, so one instance can be shared
//! across threads.

use crate::config::{NormalizerBuilder, NormalizerConfig};
use crate::error::Result;
use crate::pass::PassId;
use crate::passes::PassContext;
use crate::pipeline::{PassTrace, Pipeline, STANDARD_ORDER, UNIT_ORDER};
use crate::rules::RuleSet;
use lbnorm_core::{Lexicon, Numerals};
use std::sync::Arc;

/// Rewrites numerals, dates, times, units, amounts and acronyms into words
#[derive(Debug, Clone)]
pub struct Normalizer {
    numerals: Numerals,
    rules: Arc<RuleSet>,
    pipeline: Pipeline,
    unit_pipeline: Pipeline,
}

impl Normalizer {
    /// Create a normalizer over the built-in Luxembourgish tables
    pub fn new() -> Result<Self> {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer with custom configuration
    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        let lexicon = match config.lexicon {
            Some(lexicon) => lexicon,
            None => Lexicon::luxembourgish()?,
        };
        let rules = match config.rules {
            Some(rules) => rules,
            None => RuleSet::luxembourgish()?,
        };
        if lexicon.code() != rules.code() {
            log::warn!(
                "lexicon '{}' and rule set '{}' are for different languages",
                lexicon.code(),
                rules.code()
            );
        }

        let numerals = Numerals::new(lexicon).with_currency_options(config.currency_options);
        let ctx = PassContext::new(numerals.clone(), Arc::clone(&rules));
        Ok(Self {
            pipeline: Pipeline::build(&STANDARD_ORDER, &config.disabled, &ctx)?,
            unit_pipeline: Pipeline::build(&UNIT_ORDER, &config.disabled, &ctx)?,
            numerals,
            rules,
        })
    }

    /// Create a builder
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }

    /// Normalize text for speech
    ///
    /// Never fails: anything that cannot be spelled is left as written.
    pub fn normalize(&self, text: &str) -> String {
        self.pipeline.run(text)
    }

    /// Normalize text, returning the text after every pass
    pub fn trace(&self, text: &str) -> Vec<PassTrace> {
        self.pipeline.trace(text)
    }

    /// Spell only grouped numbers, units and suffixed years
    pub fn to_unit(&self, text: &str) -> String {
        self.unit_pipeline.run(text)
    }

    /// Numeral services used by the passes
    pub fn numerals(&self) -> &Numerals {
        &self.numerals
    }

    /// Rule tables used by the passes
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Passes of the full pipeline in execution order
    pub fn passes(&self) -> Vec<PassId> {
        self.pipeline.ids()
    }
}
