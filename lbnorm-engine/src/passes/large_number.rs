//! Numbers with thousands separators
//!
//! Pre: dates, money amounts and clock times consumed. Post: "1.500" and
//! "10 000" are spelled as one number. A group directly followed by a unit
//! or a large-number noun is only joined into plain digits, so the unit
//! passes can spell it with agreement.

use super::PassContext;
use crate::error::Result;
use crate::pass::{compile, inside_number, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::{Magnitude, Numerals};
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct LargeNumberPass {
    numerals: Numerals,
    separators: Vec<char>,
    /// Tokens after which the number is left for a later pass
    followers: Vec<String>,
    grouped: Regex,
}

impl LargeNumberPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let rules = &ctx.rules;
        let separators: String = rules
            .group_separators
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();

        let mut followers: Vec<String> = rules.units().iter().map(|u| u.token.clone()).collect();
        followers.push("%".to_string());
        for word in &rules.large_words {
            followers.push(word.plural.clone());
            followers.push(word.singular.clone());
        }
        followers.extend(rules.currency_symbols.keys().cloned());
        followers.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Ok(Self {
            numerals: ctx.numerals.clone(),
            separators: rules.group_separators.clone(),
            followers,
            grouped: compile(&format!(
                r"\b[0-9]{{1,3}}(?:[{separators}][0-9]{{3}})+(?:,[0-9]+)?\b"
            ))?,
        })
    }

    fn followed_by_unit(&self, rest: &str) -> bool {
        let rest = rest.trim_start_matches([' ', '\u{a0}']);
        self.followers.iter().any(|token| {
            rest.strip_prefix(token.as_str()).is_some_and(|after| {
                let word_token = token.chars().all(char::is_alphabetic);
                !word_token || !after.starts_with(char::is_alphanumeric)
            })
        })
    }
}

impl RewritePass for LargeNumberPass {
    fn id(&self) -> PassId {
        PassId::LargeNumber
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.grouped, text, |caps, haystack| {
            let whole = caps.get(0)?;
            if inside_number(haystack, whole.start(), whole.end(), &['.', ',']) {
                return None;
            }
            let digits: String = whole
                .as_str()
                .chars()
                .filter(|c| !self.separators.contains(c))
                .collect();
            if self.followed_by_unit(&haystack[whole.end()..]) {
                return Some(digits);
            }
            let value = Magnitude::parse(&digits).ok()?;
            or_keep(self.numerals.to_cardinal(value), whole.as_str())
        })
    }
}
