//! Numbers followed by Millioun/Milliard
//!
//! Pre: grouped numbers before these nouns were joined into plain digits.
//! Post: "961 Milliarden" and "1,5 Milliounen" are spelled with the noun
//! agreeing in number ("eng Milliard", "zwou Milliarden").

use super::PassContext;
use crate::error::Result;
use crate::pass::{
    alternation, char_before, compile, or_keep, replace_matches, PassId, RewritePass,
};
use crate::rules::CountNoun;
use lbnorm_core::{Magnitude, Numerals};
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct LargeNumberWordPass {
    numerals: Numerals,
    words: Vec<CountNoun>,
    pattern: Regex,
}

impl LargeNumberWordPass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let words = ctx.rules.large_words.clone();
        let forms: Vec<&str> = words
            .iter()
            .flat_map(|w| [w.singular.as_str(), w.plural.as_str()])
            .collect();
        Ok(Self {
            numerals: ctx.numerals.clone(),
            pattern: compile(&format!(
                r"\b(?P<count>[0-9]+(?:,[0-9]+)?)\s+(?P<word>(?i:{}))\b",
                alternation(&forms)
            ))?,
            words,
        })
    }

    fn noun(&self, written: &str) -> Option<&CountNoun> {
        self.words.iter().find(|w| {
            w.singular.eq_ignore_ascii_case(written) || w.plural.eq_ignore_ascii_case(written)
        })
    }

    fn spell(&self, count: &str, noun: &CountNoun) -> Option<String> {
        let lexicon = self.numerals.lexicon();
        let value = Magnitude::parse(count).ok()?;
        match value.as_integer() {
            Some(1) => Some(format!(
                "{} {}",
                lexicon.article(noun.gender, &noun.singular),
                noun.singular
            )),
            Some(2) => {
                let two = match lexicon.dual(noun.gender) {
                    Some(dual) => dual.to_string(),
                    None => or_keep(self.numerals.to_cardinal(2), count)?,
                };
                Some(format!("{two} {}", noun.plural))
            }
            _ => {
                let number = or_keep(self.numerals.to_cardinal(value), count)?;
                Some(format!("{number} {}", noun.plural))
            }
        }
    }
}

impl RewritePass for LargeNumberWordPass {
    fn id(&self) -> PassId {
        PassId::LargeNumberWord
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_matches(&self.pattern, text, |caps, haystack| {
            let whole = caps.get(0)?;
            if char_before(haystack, whole.start()).is_some_and(|c| c == '.' || c == ',') {
                return None;
            }
            let noun = self.noun(&caps["word"])?;
            self.spell(&caps["count"], noun)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::pass::PassId;
    use crate::passes::test_support::pass;

    #[test]
    fn test_agreement() {
        let p = pass(PassId::LargeNumberWord);
        assert_eq!(p.rewrite("1 Milliard"), "eng Milliard");
        assert_eq!(p.rewrite("1 Milliarden"), "eng Milliard");
        assert_eq!(p.rewrite("2 Milliounen"), "zwou Milliounen");
        assert_eq!(
            p.rewrite("961 Milliarden Euro"),
            "nénghonnerteenasechzeg Milliarden Euro"
        );
        assert_eq!(p.rewrite("5 milliounen"), "fënnef Milliounen");
    }

    #[test]
    fn test_decimal_counts() {
        assert_eq!(
            pass(PassId::LargeNumberWord).rewrite("1,5 Milliounen"),
            "eent Komma fënnef Milliounen"
        );
    }

    #[test]
    fn test_other_nouns_are_untouched() {
        let p = pass(PassId::LargeNumberWord);
        assert_eq!(p.rewrite("5 Milliardären"), "5 Milliardären");
        assert_eq!(p.rewrite("5 Leit"), "5 Leit");
    }
}
