//! Rewrite pass interface
//!
//! A pass is one regex-driven scan over the text. Passes never fail: a
//! match that cannot be spelled is left exactly as it was.

use crate::error::EngineError;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Identifier of a rewrite pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassId {
    /// Telephone numbers, digit by digit
    Phone,
    /// Money amounts
    Currency,
    /// Uppercase acronyms
    Abbreviation,
    /// Match scores ("3:1")
    Score,
    /// Full dates with a year
    Date,
    /// Day and month without a year
    OrdinalDate,
    /// Clock times
    Time,
    /// Numbers with thousands separators
    LargeNumber,
    /// Numbers followed by Millioun/Milliard
    LargeNumberWord,
    /// Numbers followed by a unit
    Unit,
    /// Years and decades with the "er" suffix
    YearSuffix,
    /// Decimal numbers with a comma
    Decimal,
    /// Any remaining digit run
    BareNumber,
}

impl PassId {
    /// Every pass, in pipeline order of first appearance
    pub const ALL: [PassId; 13] = [
        PassId::Phone,
        PassId::Currency,
        PassId::Abbreviation,
        PassId::Score,
        PassId::Date,
        PassId::OrdinalDate,
        PassId::Time,
        PassId::LargeNumber,
        PassId::LargeNumberWord,
        PassId::Unit,
        PassId::YearSuffix,
        PassId::Decimal,
        PassId::BareNumber,
    ];

    /// Kebab-case name used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            PassId::Phone => "phone",
            PassId::Abbreviation => "abbreviation",
            PassId::Score => "score",
            PassId::Date => "date",
            PassId::OrdinalDate => "ordinal-date",
            PassId::Currency => "currency",
            PassId::Time => "time",
            PassId::LargeNumber => "large-number",
            PassId::LargeNumberWord => "large-number-word",
            PassId::Unit => "unit",
            PassId::YearSuffix => "year-suffix",
            PassId::Decimal => "decimal",
            PassId::BareNumber => "bare-number",
        }
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PassId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PassId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| EngineError::Configuration(format!("Unknown pass: {s}")))
    }
}

/// One stage of the normalization pipeline
pub trait RewritePass: Send + Sync {
    /// Which pass this is
    fn id(&self) -> PassId;

    /// Rewrite every match in `text`, borrowing when nothing changed
    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// Replace every match of `regex` with the closure's result
///
/// The closure also receives the whole haystack so it can look at the
/// context around a match; returning `None` keeps the match verbatim.
pub(crate) fn replace_matches<'t, F>(regex: &Regex, text: &'t str, mut replacer: F) -> Cow<'t, str>
where
    F: FnMut(&Captures<'t>, &'t str) -> Option<String>,
{
    let mut out = String::new();
    let mut last = 0;
    let mut changed = false;
    for caps in regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if let Some(replacement) = replacer(&caps, text) {
            out.push_str(&text[last..whole.start()]);
            out.push_str(&replacement);
            last = whole.end();
            changed = true;
        }
    }
    if !changed {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Chain a further rewrite onto an intermediate result
pub(crate) fn chain<'t, F>(text: Cow<'t, str>, f: F) -> Cow<'t, str>
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    match text {
        Cow::Borrowed(borrowed) => f(borrowed),
        Cow::Owned(owned) => Cow::Owned(f(&owned).into_owned()),
    }
}

/// Keep the match when spelling fails
pub(crate) fn or_keep(result: lbnorm_core::Result<String>, matched: &str) -> Option<String> {
    match result {
        Ok(words) => Some(words),
        Err(e) => {
            log::debug!("keeping '{matched}' unchanged: {e}");
            None
        }
    }
}

/// Character before byte offset `at`
pub(crate) fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

/// Character at byte offset `at`
pub(crate) fn char_at(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

/// Whether a number at `start..end` continues a longer numeric expression
/// such as "1.2.3" or "4,5,6"
pub(crate) fn inside_number(text: &str, start: usize, end: usize, separators: &[char]) -> bool {
    let joins = |sep: char, digit: char| separators.contains(&sep) && digit.is_ascii_digit();

    let mut before = text[..start].chars().rev();
    let joined_before = matches!(
        (before.next(), before.next()),
        (Some(sep), Some(digit)) if joins(sep, digit)
    );
    let mut after = text[end..].chars();
    let joined_after = matches!(
        (after.next(), after.next()),
        (Some(sep), Some(digit)) if joins(sep, digit)
    );
    joined_before || joined_after
}

/// Compile a pattern assembled from configuration
pub(crate) fn compile(pattern: &str) -> crate::error::Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| EngineError::Configuration(format!("Invalid pattern {pattern}: {e}")))
}

/// Regex alternation of literal words, longest first
pub(crate) fn alternation<S: AsRef<str>>(words: &[S]) -> String {
    let mut words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_names_round_trip() {
        for id in PassId::ALL {
            assert_eq!(id.name().parse::<PassId>().unwrap(), id);
        }
        assert_eq!("Year_Suffix".parse::<PassId>().unwrap(), PassId::YearSuffix);
        assert!("nope".parse::<PassId>().is_err());
    }

    #[test]
    fn test_replace_matches_keeps_declined_matches() {
        let regex = Regex::new("[0-9]+").unwrap();
        let out = replace_matches(&regex, "a 1 b 22 c", |caps, _| {
            (caps[0].len() == 2).then(|| "zwee".to_string())
        });
        assert_eq!(out, "a 1 b zwee c");

        let untouched = replace_matches(&regex, "a 1", |_, _| None);
        assert!(matches!(untouched, Cow::Borrowed("a 1")));
    }

    #[test]
    fn test_inside_number() {
        let text = "1,2,3 and 45";
        assert!(inside_number(text, 0, 3, &[',']));
        assert!(!inside_number(text, 10, 12, &[',']));
    }

    #[test]
    fn test_alternation_is_longest_first() {
        assert_eq!(alternation(&["de", "den", "an dësen"]), "an dësen|den|de");
        assert_eq!(alternation(&["°", "°C"]), "°C|°");
    }
}
