//! Money amounts
//!
//! Pre: phone numbers spelled. Post: "2,50 EUR", "€ 5" and "1.500 €" read
//! through the currency formatter. Runs ahead of the acronym pass so codes
//! are read as currency names, and ahead of the time pass so "2.50 EUR" is
//! not a clock time.

use super::PassContext;
use crate::error::Result;
use crate::pass::{
    alternation, chain, char_at, char_before, compile, or_keep, replace_matches, PassId,
    RewritePass,
};
use crate::rules::RuleSet;
use lbnorm_core::{Magnitude, Numerals};
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

pub(crate) struct CurrencyPass {
    numerals: Numerals,
    rules: Arc<RuleSet>,
    amount_first: Regex,
    symbol_first: Regex,
    grouped: Regex,
}

impl CurrencyPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let symbols: Vec<&str> = ctx.rules.currency_symbols.keys().map(String::as_str).collect();
        let prefix_symbols: Vec<&str> = symbols
            .iter()
            .copied()
            .filter(|s| !s.chars().any(char::is_alphanumeric))
            .collect();
        let separators: String = ctx
            .rules
            .group_separators
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let amount = format!(
            r"(?P<amount>[0-9]{{1,3}}(?:[{separators}][0-9]{{3}})+(?:,[0-9]{{1,2}})?|[0-9]+(?:[.,][0-9]{{1,2}})?)"
        );
        Ok(Self {
            numerals: ctx.numerals.clone(),
            rules: Arc::clone(&ctx.rules),
            amount_first: compile(&format!(
                r"\b{amount}[ \t\x{{a0}}]*(?P<symbol>{})",
                alternation(&symbols)
            ))?,
            symbol_first: compile(&format!(
                r"(?P<symbol>{})[ \t\x{{a0}}]*{amount}\b",
                alternation(&prefix_symbols)
            ))?,
            grouped: compile(&format!(r"^[0-9]{{1,3}}(?:[{separators}][0-9]{{3}})+(?:,[0-9]+)?$"))?,
        })
    }

    /// Amount as written to a number: group separators dropped, decimal
    /// comma turned into a point
    fn parse_amount(&self, amount: &str) -> Option<Magnitude> {
        if self.grouped.is_match(amount) {
            let digits: String = amount
                .chars()
                .filter(|c| !self.rules.group_separators.contains(c))
                .collect();
            return Magnitude::parse(&digits).ok();
        }
        Magnitude::parse(amount).ok()
    }

    fn spell(&self, amount: &str, symbol: &str) -> Option<String> {
        let code = self.rules.currency_code(symbol)?;
        let value = self.parse_amount(amount)?;
        or_keep(self.numerals.to_currency(value, code), amount)
    }
}

impl RewritePass for CurrencyPass {
    fn id(&self) -> PassId {
        PassId::Currency
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let text = replace_matches(&self.amount_first, text, |caps, haystack| {
            let whole = caps.get(0)?;
            let symbol = &caps["symbol"];
            let glued_before = char_before(haystack, whole.start())
                .is_some_and(|c| c == '.' || c == ',' || c == '-');
            let word_symbol = symbol.chars().all(char::is_alphabetic);
            let glued_after =
                word_symbol && char_at(haystack, whole.end()).is_some_and(char::is_alphanumeric);
            if glued_before || glued_after {
                return None;
            }
            self.spell(&caps["amount"], symbol)
        });
        chain(text, |t| {
            replace_matches(&self.symbol_first, t, |caps, _| {
                self.spell(&caps["amount"], &caps["symbol"])
            })
        })
    }
}
