//! Dates
//!
//! Pre: phone numbers, acronyms and scores handled. Post: dates are read
//! as "[article] <ordinal day> <month> <year>". The day ordinal loses its
//! final "n" unless the month starts with a vowel or n, d, t, z, and a
//! preceding "den" follows the same rule. Impossible days or months leave
//! the date untouched.

use super::PassContext;
use crate::error::Result;
use crate::pass::{
    alternation, chain, char_at, char_before, compile, inside_number, or_keep, replace_matches,
    PassId, RewritePass,
};
use crate::rules::RuleSet;
use lbnorm_core::Numerals;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;

const MAX_DAY: u32 = 31;

/// Spelling shared by the date passes
struct DateWords {
    numerals: Numerals,
    rules: Arc<RuleSet>,
}

impl DateWords {
    fn new(ctx: &PassContext) -> Self {
        Self {
            numerals: ctx.numerals.clone(),
            rules: Arc::clone(&ctx.rules),
        }
    }

    fn day(&self, day: &str) -> Option<u32> {
        day.parse::<u32>().ok().filter(|d| (1..=MAX_DAY).contains(d))
    }

    /// "<article> <ordinal>" with n-deletion applied to both words
    fn ordinal_day(&self, article: Option<&str>, day: u32, next_word: &str) -> Option<String> {
        let lexicon = self.numerals.lexicon();
        let ordinal = or_keep(self.numerals.to_ordinal(day), &day.to_string())?;
        let ordinal = lexicon.elide_final_n(&ordinal, next_word);
        Some(match article {
            Some(article) => format!("{} {ordinal}", lexicon.elide_final_n(article, &ordinal)),
            None => ordinal,
        })
    }

    fn year(&self, year: &str) -> Option<String> {
        let value = year.parse::<u32>().ok()?;
        or_keep(self.numerals.to_year(value), year)
    }

    fn month(&self, word: &str) -> Option<&str> {
        self.rules
            .month_number(word)
            .and_then(|n| self.rules.month_name(n))
    }

    fn numeric_month(&self, month: &str) -> Option<&str> {
        self.rules.month_name(month.parse::<u32>().ok()?)
    }
}

fn article<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.name("article").map(|m| m.as_str())
}

/// Dates with a year: "30. Abrëll 2010", "09.07.2025", "Mäerz 1999"
pub(crate) struct DatePass {
    words: DateWords,
    named: Regex,
    numeric: Regex,
    month_year: Regex,
}

impl DatePass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let articles = format!(
            r"(?:\b(?P<article>(?i:{}))\s+)?",
            alternation(&ctx.rules.date_articles)
        );
        let months = alternation(&ctx.rules.month_words());
        Ok(Self {
            words: DateWords::new(ctx),
            named: compile(&format!(
                r"{articles}\b(?P<day>[0-9]{{1,2}})\.\s*(?P<month>{months})\s+(?P<year>[0-9]{{4}})\b"
            ))?,
            numeric: compile(&format!(
                r"{articles}\b(?P<day>[0-9]{{1,2}})\.(?P<month>[0-9]{{1,2}})\.(?P<year>[0-9]{{4}})\b"
            ))?,
            month_year: compile(&format!(
                r"{articles}\b(?P<month>{months})\s+(?P<year>[0-9]{{4}})\b"
            ))?,
        })
    }

    fn full_date(&self, caps: &Captures<'_>, month: &str) -> Option<String> {
        let day = self.words.day(&caps["day"])?;
        let ordinal = self.words.ordinal_day(article(caps), day, month)?;
        let year = self.words.year(&caps["year"])?;
        Some(format!("{ordinal} {month} {year}"))
    }
}

impl RewritePass for DatePass {
    fn id(&self) -> PassId {
        PassId::Date
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let text = replace_matches(&self.named, text, |caps, _| {
            let month = self.words.month(&caps["month"])?;
            self.full_date(caps, month)
        });
        let text = chain(text, |t| {
            replace_matches(&self.numeric, t, |caps, haystack| {
                let whole = caps.get(0)?;
                let day_start = caps.name("day")?.start();
                if inside_number(haystack, day_start, whole.end(), &['.', ',']) {
                    return None;
                }
                let month = self.words.numeric_month(&caps["month"])?;
                self.full_date(caps, month)
            })
        });
        chain(text, |t| {
            replace_matches(&self.month_year, t, |caps, _| {
                let month = self.words.month(&caps["month"])?;
                let year = self.words.year(&caps["year"])?;
                Some(match article(caps) {
                    Some(article) => format!("{article} {month} {year}"),
                    None => format!("{month} {year}"),
                })
            })
        })
    }
}

/// Day and month without a year: "den 3. Mee", "um 4.6."
pub(crate) struct OrdinalDatePass {
    words: DateWords,
    named: Regex,
    numeric: Regex,
}

impl OrdinalDatePass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        let articles = format!(
            r"(?:\b(?P<article>(?i:{}))\s+)?",
            alternation(&ctx.rules.ordinal_articles)
        );
        Ok(Self {
            words: DateWords::new(ctx),
            named: compile(&format!(
                r"{articles}\b(?P<day>[0-9]{{1,2}})\.\s?(?P<word>\p{{Lu}}\p{{L}}*)(?P<dot>\.)?"
            ))?,
            numeric: compile(&format!(
                r"{articles}\b(?P<day>[0-9]{{1,2}})\.(?P<month>[0-9]{{1,2}})\."
            ))?,
        })
    }

    /// The noun after the day: a month (alias expanded) or, after an
    /// article, any capitalised word. Returns the word and whether the
    /// trailing dot belonged to it.
    fn noun(&self, caps: &Captures<'_>) -> Option<(String, bool)> {
        let word = &caps["word"];
        if caps.name("dot").is_some() {
            if let Some(month) = self.words.month(&format!("{word}.")) {
                return Some((month.to_string(), true));
            }
        }
        if let Some(month) = self.words.month(word) {
            return Some((month.to_string(), false));
        }
        article(caps).map(|_| (word.to_string(), false))
    }
}

impl RewritePass for OrdinalDatePass {
    fn id(&self) -> PassId {
        PassId::OrdinalDate
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let text = replace_matches(&self.named, text, |caps, _| {
            let (noun, dot_consumed) = self.noun(caps)?;
            let day = caps["day"].parse::<u32>().ok().filter(|d| *d >= 1)?;
            if self.words.month(&noun).is_some() && day > MAX_DAY {
                return None;
            }
            let ordinal = self.words.ordinal_day(article(caps), day, &noun)?;
            let dot = if caps.name("dot").is_some() && !dot_consumed { "." } else { "" };
            Some(format!("{ordinal} {noun}{dot}"))
        });
        chain(text, |t| {
            replace_matches(&self.numeric, t, |caps, haystack| {
                let whole = caps.get(0)?;
                let day_start = caps.name("day")?.start();
                let glued_before = char_before(haystack, day_start)
                    .is_some_and(|c| c == '.' || c == ',' || c.is_ascii_digit());
                let glued_after =
                    char_at(haystack, whole.end()).is_some_and(|c| c.is_ascii_digit());
                if glued_before || glued_after {
                    return None;
                }
                let month = self.words.numeric_month(&caps["month"])?;
                let day = self.words.day(&caps["day"])?;
                let ordinal = self.words.ordinal_day(article(caps), day, month)?;
                Some(format!("{ordinal} {month}"))
            })
        })
    }
}
