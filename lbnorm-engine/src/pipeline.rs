//! Ordered pass execution

use crate::error::Result;
use crate::pass::{PassId, RewritePass};
use crate::passes::{self, PassContext};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Full normalization order
///
/// The date passes run a second time after the time pass, which can leave
/// date-like residues behind.
pub const STANDARD_ORDER: [PassId; 15] = [
    PassId::Phone,
    PassId::Currency,
    PassId::Abbreviation,
    PassId::Score,
    PassId::Date,
    PassId::OrdinalDate,
    PassId::Time,
    PassId::Date,
    PassId::OrdinalDate,
    PassId::LargeNumber,
    PassId::LargeNumberWord,
    PassId::Unit,
    PassId::YearSuffix,
    PassId::Decimal,
    PassId::BareNumber,
];

/// Passes run by [`crate::Normalizer::to_unit`]
pub const UNIT_ORDER: [PassId; 3] = [PassId::LargeNumber, PassId::Unit, PassId::YearSuffix];

/// Text after one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassTrace {
    /// Pass that ran
    pub pass: PassId,
    /// Text after the pass
    pub output: String,
    /// Whether the pass rewrote anything
    pub changed: bool,
}

/// An ordered list of rewrite passes
#[derive(Clone)]
pub struct Pipeline {
    passes: Vec<Arc<dyn RewritePass>>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

impl Pipeline {
    /// Build `order` minus the disabled passes; a pass listed twice is
    /// built once and shared.
    pub(crate) fn build(
        order: &[PassId],
        disabled: &BTreeSet<PassId>,
        ctx: &PassContext,
    ) -> Result<Self> {
        let mut built: HashMap<PassId, Arc<dyn RewritePass>> = HashMap::new();
        let mut list = Vec::with_capacity(order.len());
        for &id in order.iter().filter(|id| !disabled.contains(id)) {
            let pass = match built.get(&id) {
                Some(pass) => Arc::clone(pass),
                None => {
                    let pass = passes::build(id, ctx)?;
                    built.insert(id, Arc::clone(&pass));
                    pass
                }
            };
            list.push(pass);
        }
        log::debug!("pipeline: {}", format_ids(list.iter().map(|p| p.id())));
        Ok(Self { passes: list })
    }

    /// Pass identifiers in execution order
    pub fn ids(&self) -> Vec<PassId> {
        self.passes.iter().map(|p| p.id()).collect()
    }

    /// Run every pass in order
    pub fn run(&self, text: &str) -> String {
        let mut current = text.to_string();
        for pass in &self.passes {
            if let Cow::Owned(rewritten) = pass.rewrite(&current) {
                log::debug!("{} rewrote the text", pass.id());
                current = rewritten;
            }
        }
        current
    }

    /// Run every pass in order, recording the text after each
    pub fn trace(&self, text: &str) -> Vec<PassTrace> {
        let mut current = text.to_string();
        let mut steps = Vec::with_capacity(self.passes.len());
        for pass in &self.passes {
            let rewritten = pass.rewrite(&current).into_owned();
            let changed = rewritten != current;
            current = rewritten;
            steps.push(PassTrace {
                pass: pass.id(),
                output: current.clone(),
                changed,
            });
        }
        steps
    }
}

fn format_ids(ids: impl Iterator<Item = PassId>) -> String {
    ids.map(|id| id.name()).collect::<Vec<_>>().join(" > ")
}
