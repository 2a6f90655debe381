//! Numeral grammar
//!
//! Maps magnitudes to cardinal, ordinal and year word forms. Tabulated
//! forms always win; the generative rules only fill the gaps.

mod cardinal;
mod ordinal;
mod year;

use crate::decimal::DecimalFormatter;
use crate::error::{NumeralError, Result};
use crate::lexicon::Lexicon;
use crate::magnitude::Magnitude;
use std::sync::Arc;

/// Cardinal, ordinal and year spelling over an injected lexicon
#[derive(Debug, Clone)]
pub struct NumeralGrammar {
    lexicon: Arc<Lexicon>,
}

impl NumeralGrammar {
    /// Create a grammar over `lexicon`
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Grammar over the built-in Luxembourgish lexicon
    pub fn luxembourgish() -> Result<Self> {
        Ok(Self::new(Lexicon::luxembourgish()?))
    }

    /// The lexicon backing this grammar
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Shared handle to the lexicon
    pub fn lexicon_arc(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }

    /// Spell a cardinal number
    ///
    /// Negative values are prefixed with the negation word, fractional
    /// values are read as "<integer> Komma <fraction>".
    ///
    /// # Errors
    ///
    /// [`NumeralError::Range`] when the magnitude reaches the scale ceiling.
    pub fn to_cardinal<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        let value = value.into().normalized();
        match value {
            Magnitude::Integer(n) => {
                let words = self.spell_unsigned(self.unsigned(n, &value)?)?;
                Ok(self.with_sign(value.is_negative(), words))
            }
            Magnitude::Decimal(d) => DecimalFormatter::new(self.clone()).format(d),
        }
    }

    /// Spell a non-negative integer
    pub fn spell_unsigned(&self, n: u128) -> Result<String> {
        if n >= self.lexicon.ceiling() {
            return Err(self.range_error(n));
        }
        Ok(self.decompose(n).text)
    }

    pub(crate) fn with_sign(&self, negative: bool, words: String) -> String {
        if negative {
            format!("{} {}", self.lexicon.negative_word(), words)
        } else {
            words
        }
    }

    pub(crate) fn unsigned(&self, n: i128, original: &Magnitude) -> Result<u128> {
        let abs = n.unsigned_abs();
        if abs >= self.lexicon.ceiling() {
            return Err(NumeralError::Range {
                value: original.to_string(),
                limit: self.lexicon.ceiling().to_string(),
            });
        }
        Ok(abs)
    }

    fn range_error(&self, n: u128) -> NumeralError {
        NumeralError::Range {
            value: n.to_string(),
            limit: self.lexicon.ceiling().to_string(),
        }
    }

    /// Form of a number used as a multiplier or compound prefix:
    /// a final "eent" shortens to "een" ("eenandrëssegdausend").
    pub fn compound_form(&self, words: &str) -> String {
        let one = self.lexicon.cardinal_exception(1).unwrap_or_default();
        match words.strip_suffix(one) {
            Some(stem) if !one.is_empty() => format!("{stem}{}", self.lexicon.compound_one),
            _ => words.to_string(),
        }
    }
}
