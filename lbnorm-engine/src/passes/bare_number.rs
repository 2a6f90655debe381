//! Remaining digit runs
//!
//! Pre: every structured pattern has been consumed. Post: each whole-word
//! digit run is spelled as a cardinal. A free-standing "-" in front reads
//! as "minus"; after a letter or digit it stays a hyphen. Runs beyond the
//! scale ceiling stay as digits.

use super::PassContext;
use crate::error::Result;
use crate::pass::{char_before, compile, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::{Magnitude, Numerals};
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct BareNumberPass {
    numerals: Numerals,
    pattern: Regex,
}

impl BareNumberPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        Ok(Self {
            numerals: ctx.numerals.clone(),
            pattern: compile(r"(?P<sign>-)?\b(?P<digits>[0-9]+)\b")?,
        })
    }
}

impl RewritePass for BareNumberPass {
    fn id(&self) -> PassId {
        PassId::BareNumber
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| {
            let whole = caps.get(0)?;
            let digits = &caps["digits"];
            let value = Magnitude::parse(digits).ok()?;
            let words = or_keep(self.numerals.to_cardinal(value), digits)?;
            let glued = char_before(haystack, whole.start()).is_some_and(char::is_alphanumeric);
            Some(match caps.name("sign") {
                Some(_) if glued => format!("-{words}"),
                Some(_) => format!("{} {words}", self.numerals.lexicon().negative_word()),
                None => words,
            })
        })
    }
}
