//! Decimal numbers
//!
//! Pre: money amounts, units and grouped numbers consumed. Post: "3,5"
//! reads as "dräi Komma fënnef" and "-0,25" as "minus null Komma
//! fënnefanzwanzeg". Comma-separated lists such as "1,2,3" are left to
//! the bare-number pass.

use super::PassContext;
use crate::error::Result;
use crate::pass::{
    char_before, compile, inside_number, or_keep, replace_matches, PassId, RewritePass,
};
use lbnorm_core::{Magnitude, Numerals};
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct DecimalPass {
    numerals: Numerals,
    pattern: Regex,
}

impl DecimalPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        Ok(Self {
            numerals: ctx.numerals.clone(),
            pattern: compile(r"(?P<sign>-)?\b(?P<number>[0-9]+,[0-9]+)\b")?,
        })
    }
}

impl RewritePass for DecimalPass {
    fn id(&self) -> PassId {
        PassId::Decimal
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| {
            let whole = caps.get(0)?;
            let number = caps.name("number")?;
            if inside_number(haystack, number.start(), number.end(), &[',', '.']) {
                return None;
            }
            let value = Magnitude::parse(number.as_str()).ok()?;
            let words = or_keep(self.numerals.to_cardinal(value), number.as_str())?;
            let glued = char_before(haystack, whole.start()).is_some_and(char::is_alphanumeric);
            Some(match caps.name("sign") {
                Some(_) if glued => format!("-{words}"),
                Some(_) => format!("{} {words}", self.numerals.lexicon().negative_word()),
                None => words,
            })
        })
    }
}
