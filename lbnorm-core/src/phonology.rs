//! n-deletion (Eifeler Regel)
//!
//! A word-final "n" is kept only before a vowel or one of n, d, t, z.
//! The same rule picks the joiner in compound numbers ("an"/"a"), the
//! masculine article ("een"/"ee") and the currency conjunction.

use crate::lexicon::{Gender, Lexicon, Noun};

impl Lexicon {
    /// Whether a final "n" survives before `next`
    pub fn keeps_final_n(&self, next: &str) -> bool {
        next.chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .is_some_and(|c| self.n_retaining.contains(&c))
    }

    /// Drop the final "n" of `word` when `next` does not retain it
    pub fn elide_final_n(&self, word: &str, next: &str) -> String {
        match word.strip_suffix('n') {
            Some(stem) if !self.keeps_final_n(next) => stem.to_string(),
            _ => word.to_string(),
        }
    }

    /// Joiner between a unit and a following decade word, also used as
    /// the conjunction between currency clauses
    pub fn joiner_before(&self, next: &str) -> &str {
        if self.keeps_final_n(next) {
            &self.joiner
        } else {
            &self.joiner_reduced
        }
    }

    /// Indefinite article for a singular noun of `gender`
    pub fn article(&self, gender: Gender, next: &str) -> &str {
        match gender {
            Gender::Feminine => &self.feminine_article,
            Gender::Masculine | Gender::Neuter => {
                if self.keeps_final_n(next) {
                    &self.masculine_article
                } else {
                    &self.masculine_article_reduced
                }
            }
        }
    }

    /// Singular article for a noun, honouring a lexicalised override
    pub fn noun_article<'a>(&'a self, noun: &'a Noun) -> &'a str {
        noun.article
            .as_deref()
            .unwrap_or_else(|| self.article(noun.gender, &noun.singular))
    }

    /// Count word for two, if `gender` has a dual form ("zwou")
    pub fn dual(&self, gender: Gender) -> Option<&str> {
        (gender == Gender::Feminine).then_some(self.feminine_dual.as_str())
    }
}
