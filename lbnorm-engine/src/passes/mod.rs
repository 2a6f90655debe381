//! Rewrite pass implementations
//!
//! Each module documents what it expects earlier passes to have consumed
//! (Pre) and what it leaves behind (Post).

mod abbreviation;
mod bare_number;
mod currency;
mod date;
mod decimal;
mod large_number;
mod large_number_word;
mod phone;
mod score;
mod time;
mod unit;
mod year_suffix;

use crate::error::Result;
use crate::pass::{PassId, RewritePass};
use crate::rules::RuleSet;
use lbnorm_core::Numerals;
use std::sync::Arc;

/// Shared services every pass is built from
#[derive(Debug, Clone)]
pub(crate) struct PassContext {
    pub(crate) numerals: Numerals,
    pub(crate) rules: Arc<RuleSet>,
}

impl PassContext {
    pub(crate) fn new(numerals: Numerals, rules: Arc<RuleSet>) -> Self {
        Self { numerals, rules }
    }
}

/// Build the pass with the given identifier
pub(crate) fn build(id: PassId, ctx: &PassContext) -> Result<Arc<dyn RewritePass>> {
    let pass: Arc<dyn RewritePass> = match id {
        PassId::Phone => Arc::new(phone::PhonePass::new(ctx)?),
        PassId::Abbreviation => Arc::new(abbreviation::AbbreviationPass::new(ctx)?),
        PassId::Score => Arc::new(score::ScorePass::new(ctx)?),
        PassId::Date => Arc::new(date::DatePass::new(ctx)?),
        PassId::OrdinalDate => Arc::new(date::OrdinalDatePass::new(ctx)?),
        PassId::Currency => Arc::new(currency::CurrencyPass::new(ctx)?),
        PassId::Time => Arc::new(time::TimePass::new(ctx)?),
        PassId::LargeNumber => Arc::new(large_number::LargeNumberPass::new(ctx)?),
        PassId::LargeNumberWord => Arc::new(large_number_word::LargeNumberWordPass::new(ctx)?),
        PassId::Unit => Arc::new(unit::UnitPass::new(ctx)?),
        PassId::YearSuffix => Arc::new(year_suffix::YearSuffixPass::new(ctx)?),
        PassId::Decimal => Arc::new(decimal::DecimalPass::new(ctx)?),
        PassId::BareNumber => Arc::new(bare_number::BareNumberPass::new(ctx)?),
    };
    Ok(pass)
}
