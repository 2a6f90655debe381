//! Numbers with units
//!
//! Pre: grouped numbers before a unit were joined into plain digits.
//! Post: "20°C", "-10°", "1,5 kg", "93,9 %" and "2 Stonnen" are spelled
//! with the unit noun. A count of one takes the singular with its article,
//! a count of two takes the dual for feminine nouns.

use super::PassContext;
use crate::error::Result;
use crate::pass::{
    alternation, char_at, char_before, compile, or_keep, replace_matches, PassId, RewritePass,
};
use crate::rules::{CountNoun, RuleSet};
use lbnorm_core::{Magnitude, Numerals};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;

const PERCENT: &str = "%";

pub(crate) struct UnitPass {
    numerals: Numerals,
    rules: Arc<RuleSet>,
    pattern: Regex,
}

impl UnitPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let mut tokens: Vec<&str> = ctx.rules.units().iter().map(|u| u.token.as_str()).collect();
        tokens.push(PERCENT);
        Ok(Self {
            numerals: ctx.numerals.clone(),
            rules: Arc::clone(&ctx.rules),
            pattern: compile(&format!(
                r"(?P<sign>-)?(?P<count>[0-9]+(?:[.,][0-9]+)?)[ \t\x{{a0}}]*(?P<unit>{})",
                alternation(&tokens)
            ))?,
        })
    }

    fn counted(&self, value: Magnitude, noun: &CountNoun) -> lbnorm_core::Result<String> {
        let lexicon = self.numerals.lexicon();
        match (value.as_integer(), lexicon.dual(noun.gender)) {
            (Some(1), _) => Ok(format!(
                "{} {}",
                lexicon.article(noun.gender, &noun.singular),
                noun.singular
            )),
            (Some(2), Some(dual)) => Ok(format!("{dual} {}", noun.plural)),
            _ => Ok(format!("{} {}", self.numerals.to_cardinal(value)?, noun.plural)),
        }
    }

    fn spell(&self, count: &str, unit: &str, negative: bool) -> Option<String> {
        let value = Magnitude::parse(count).ok()?;
        let words = if unit == PERCENT {
            self.numerals.to_percentage(value)
        } else {
            let noun = &self.rules.units().iter().find(|u| u.token == unit)?.noun;
            self.counted(value, noun)
        };
        let words = or_keep(words, count)?;
        Some(if negative {
            format!("{} {words}", self.numerals.lexicon().negative_word())
        } else {
            words
        })
    }

    fn replace(&self, caps: &Captures<'_>, haystack: &str) -> Option<String> {
        let whole = caps.get(0)?;
        let count = caps.name("count")?;
        let unit = &caps["unit"];

        // Alphabetic units must end at a word boundary ("5 gr" but not "5 grouss")
        if unit.chars().all(char::is_alphabetic)
            && char_at(haystack, whole.end()).is_some_and(char::is_alphanumeric)
        {
            return None;
        }
        let before = char_before(haystack, whole.start());
        if before.is_some_and(|c| c == '.' || c == ',') {
            return None;
        }

        match caps.name("sign") {
            Some(_) if before.is_some_and(char::is_alphanumeric) => {
                // A hyphen inside a word or range, not a minus
                self.spell(count.as_str(), unit, false).map(|w| format!("-{w}"))
            }
            Some(_) => self.spell(count.as_str(), unit, true),
            None if before.is_some_and(char::is_alphabetic) => None,
            None => self.spell(count.as_str(), unit, false),
        }
    }
}

impl RewritePass for UnitPass {
    fn id(&self) -> PassId {
        PassId::Unit
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| self.replace(caps, haystack))
    }
}
