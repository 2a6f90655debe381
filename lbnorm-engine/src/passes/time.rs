//! Clock times
//!
//! Pre: scores and money amounts consumed, so "3:1" and "2.50 EUR" no
//! longer look like times. Post: "17:58", "17h58" and "17.58" read as
//! "siwwenzéng Auer aachtafofzeg"; an "Auer" already written after the
//! time is absorbed and repeated hour words collapse to one.

use super::PassContext;
use crate::error::Result;
use crate::pass::{chain, compile, inside_number, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::Numerals;
use regex::{Captures, Regex};
use std::borrow::Cow;

pub(crate) struct TimePass {
    numerals: Numerals,
    hour_word: String,
    one_hour: String,
    max_hour: u32,
    clock: Regex,
    repeated: Regex,
}

impl TimePass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let hour_word = regex::escape(&ctx.rules.hour_word);
        Ok(Self {
            numerals: ctx.numerals.clone(),
            hour_word: ctx.rules.hour_word.clone(),
            one_hour: ctx.rules.one_hour.clone(),
            max_hour: ctx.rules.max_hour,
            clock: compile(&format!(
                r"\b(?P<hour>[0-9]{{1,2}})[:h.](?P<minute>[0-5][0-9])\b(?:\s+{hour_word}\b)?"
            ))?,
            repeated: compile(&format!(r"\b{hour_word}(?:\s+{hour_word}\b)+"))?,
        })
    }

    fn hour(&self, hour: u32) -> Option<String> {
        if hour == 1 {
            return Some(self.one_hour.clone());
        }
        or_keep(self.numerals.to_cardinal(hour), &hour.to_string())
    }

    fn spell(&self, caps: &Captures<'_>, haystack: &str) -> Option<String> {
        let whole = caps.get(0)?;
        let clock = caps.name("minute")?;
        if inside_number(haystack, whole.start(), clock.end(), &['.', ',', ':']) {
            return None;
        }
        let hour = caps["hour"].parse::<u32>().ok()?;
        if hour > self.max_hour {
            return None;
        }
        let minute = caps["minute"].parse::<u32>().ok()?;
        let minute = or_keep(self.numerals.to_cardinal(minute), clock.as_str())?;
        log::trace!("clock time {}", whole.as_str());
        Some(format!("{} {} {minute}", self.hour(hour)?, self.hour_word))
    }
}

impl RewritePass for TimePass {
    fn id(&self) -> PassId {
        PassId::Time
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let text = replace_matches(&self.clock, text, |caps, haystack| self.spell(caps, haystack));
        chain(text, |t| {
            replace_matches(&self.repeated, t, |_, _| Some(self.hour_word.clone()))
        })
    }
}
