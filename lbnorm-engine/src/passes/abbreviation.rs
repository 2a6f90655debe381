//! Acronyms
//!
//! Pre: phone numbers and money amounts spelled. Post: every run of two
//! or more uppercase letters is either a known word-like acronym (kept) or spelled as letter
//! names joined by the separator ("VW" → "Fau-Wee"). The output never
//! contains such a run again.

use super::PassContext;
use crate::error::Result;
use crate::pass::{compile, replace_matches, PassId, RewritePass};
use crate::rules::RuleSet;
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

pub(crate) struct AbbreviationPass {
    rules: Arc<RuleSet>,
    pattern: Regex,
}

impl AbbreviationPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let mut letters: Vec<char> = ctx.rules.letters.keys().copied().collect();
        letters.sort_unstable();
        let class: String = letters
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Ok(Self {
            rules: Arc::clone(&ctx.rules),
            pattern: compile(&format!(r"\b[{class}]{{2,}}\b"))?,
        })
    }

    fn spell(&self, acronym: &str) -> Option<String> {
        acronym
            .chars()
            .map(|c| self.rules.letters.get(&c).cloned())
            .collect::<Option<Vec<_>>>()
            .map(|names| names.join(&self.rules.letter_separator))
    }
}

impl RewritePass for AbbreviationPass {
    fn id(&self) -> PassId {
        PassId::Abbreviation
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, _| {
            let acronym = caps.get(0)?;
            if self.rules.pronounced.contains(acronym.as_str()) {
                return None;
            }
            log::trace!("spelling acronym {}", acronym.as_str());
            self.spell(acronym.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::pass::PassId;
    use crate::passes::test_support::pass;

    #[test]
    fn test_pronounced_acronyms_are_kept() {
        let p = pass(PassId::Abbreviation);
        assert_eq!(p.rewrite("D'NATO an d'EU"), "D'NATO an d'EU");
    }

    #[test]
    fn test_other_acronyms_are_spelled() {
        let p = pass(PassId::Abbreviation);
        assert_eq!(p.rewrite("RTL a CFL"), "Ärr-Tee-Äll a Zee-Äff-Äll");
        assert_eq!(p.rewrite("ËU"), "ËU");
        assert_eq!(p.rewrite("ÖL"), "Ö-Äll");
    }

    #[test]
    fn test_unconsumed_currency_codes_are_spelled() {
        let p = pass(PassId::Abbreviation);
        assert_eq!(p.rewrite("den EUR"), "den Ee-U-Ärr");
        assert_eq!(p.rewrite("5 EURO"), "5 Ee-U-Ärr-O");
    }

    #[test]
    fn test_output_is_stable() {
        let p = pass(PassId::Abbreviation);
        let once = p.rewrite("VW an BMW").into_owned();
        assert_eq!(once, "Fau-Wee an Bee-Ämm-Wee");
        assert_eq!(p.rewrite(&once), once);
    }
}
