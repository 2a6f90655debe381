//! Match scores
//!
//! Pre: acronyms handled. Post: "3:1" and "2-0" read as "dräi zu eent".
//! A colon form that is a valid clock time is left to the time pass.

use super::PassContext;
use crate::error::Result;
use crate::pass::{compile, inside_number, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::Numerals;
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct ScorePass {
    numerals: Numerals,
    connector: String,
    max_hour: u32,
    pattern: Regex,
}

impl ScorePass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        Ok(Self {
            numerals: ctx.numerals.clone(),
            connector: ctx.rules.score_connector.clone(),
            max_hour: ctx.rules.max_hour,
            pattern: compile(r"\b([0-9]{1,3})([:\-])([0-9]{1,3})\b")?,
        })
    }

    fn is_clock_time(&self, left: &str, separator: &str, right: &str) -> bool {
        separator == ":"
            && right.len() == 2
            && left.parse::<u32>().is_ok_and(|h| h <= self.max_hour)
            && right.parse::<u32>().is_ok_and(|m| m <= 59)
    }
}

impl RewritePass for ScorePass {
    fn id(&self) -> PassId {
        PassId::Score
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| {
            let whole = caps.get(0)?;
            let (left, separator, right) = (&caps[1], &caps[2], &caps[3]);
            if self.is_clock_time(left, separator, right)
                || inside_number(haystack, whole.start(), whole.end(), &[':', '-', '.', ','])
            {
                return None;
            }
            let spell = |n: &str| -> Option<String> {
                let value = n.parse::<u32>().ok()?;
                or_keep(self.numerals.to_cardinal(value), n)
            };
            Some(format!("{} {} {}", spell(left)?, self.connector, spell(right)?))
        })
    }
}
