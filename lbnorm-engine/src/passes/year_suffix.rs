//! Years and decades with a suffix
//!
//! Pre: grouped numbers and units consumed. Post: "1970er" reads as the
//! year form plus the suffix, "80er" as the decade cardinal plus the
//! suffix. Inflected forms ("1970ern") keep their ending.

use super::PassContext;
use crate::error::Result;
use crate::pass::{char_before, compile, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::Numerals;
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct YearSuffixPass {
    numerals: Numerals,
    pattern: Regex,
}

impl YearSuffixPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let suffix = regex::escape(&ctx.rules.year_suffix);
        Ok(Self {
            numerals: ctx.numerals.clone(),
            pattern: compile(&format!(
                r"\b(?:(?P<year>1[0-9]{{3}}|20[0-9]{{2}})|(?P<decade>[1-9]0))(?P<suffix>{suffix}\p{{L}}*)\b"
            ))?,
        })
    }
}

impl RewritePass for YearSuffixPass {
    fn id(&self) -> PassId {
        PassId::YearSuffix
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| {
            let whole = caps.get(0)?;
            if char_before(haystack, whole.start()).is_some_and(|c| c == '.' || c == ',') {
                return None;
            }
            let words = if let Some(year) = caps.name("year") {
                let value = year.as_str().parse::<u32>().ok()?;
                or_keep(self.numerals.to_year(value), year.as_str())?
            } else {
                let decade = caps.name("decade")?;
                let value = decade.as_str().parse::<u32>().ok()?;
                or_keep(self.numerals.to_cardinal(value), decade.as_str())?
            };
            Some(format!("{words}{}", &caps["suffix"]))
        })
    }
}
