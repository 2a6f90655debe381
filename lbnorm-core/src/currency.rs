//! Currency amounts ("zwee Euro a fofzeg Cent")

use crate::error::{NumeralError, Result};
use crate::grammar::NumeralGrammar;
use crate::lexicon::Noun;
use crate::magnitude::Magnitude;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rendering options for currency amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Spell the minor unit count in words (default) or keep digits
    pub spell_minor: bool,
    /// Read a zero major unit count ("null Euro an een Cent")
    pub always_show_major: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            spell_minor: true,
            always_show_major: false,
        }
    }
}

/// Spells money amounts with agreeing unit nouns
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    grammar: NumeralGrammar,
    options: CurrencyOptions,
}

impl CurrencyFormatter {
    /// Create a formatter with default options
    pub fn new(grammar: NumeralGrammar) -> Self {
        Self {
            grammar,
            options: CurrencyOptions::default(),
        }
    }

    /// Replace the default options
    pub fn with_options(mut self, options: CurrencyOptions) -> Self {
        self.options = options;
        self
    }

    /// Spell `amount` in the currency `code` using the configured options
    pub fn format<V: Into<Magnitude>>(&self, amount: V, code: &str) -> Result<String> {
        self.format_with(amount, code, self.options)
    }

    /// Spell `amount` in the currency `code`
    ///
    /// The amount is rounded half away from zero to whole minor units.
    ///
    /// # Errors
    ///
    /// [`NumeralError::UnsupportedCurrency`] for codes missing from the
    /// lexicon, [`NumeralError::Range`] for amounts that cannot be spelled.
    pub fn format_with<V: Into<Magnitude>>(
        &self,
        amount: V,
        code: &str,
        options: CurrencyOptions,
    ) -> Result<String> {
        let lexicon = self.grammar.lexicon();
        let currency = lexicon
            .currency(&code.trim().to_ascii_uppercase())
            .ok_or_else(|| NumeralError::UnsupportedCurrency {
                code: code.to_string(),
            })?;

        let amount = amount.into();
        let range_error = || NumeralError::Range {
            value: amount.to_string(),
            limit: Decimal::MAX.to_string(),
        };
        let rounded = amount
            .to_decimal()
            .ok_or_else(range_error)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let abs = rounded.abs();
        let major = abs.trunc().to_u128().ok_or_else(range_error)?;
        let minor = (abs.fract() * Decimal::ONE_HUNDRED)
            .to_u128()
            .ok_or_else(range_error)?;

        let words = match (major, minor) {
            (0, 0) => self.clause(0, &currency.major, true)?,
            (0, _) if !options.always_show_major => {
                self.clause(minor, &currency.minor, options.spell_minor)?
            }
            (_, 0) => self.clause(major, &currency.major, true)?,
            _ => {
                let major_clause = self.clause(major, &currency.major, true)?;
                let minor_clause = self.clause(minor, &currency.minor, options.spell_minor)?;
                format!(
                    "{major_clause} {} {minor_clause}",
                    lexicon.joiner_before(&minor_clause)
                )
            }
        };

        Ok(self
            .grammar
            .with_sign(rounded.is_sign_negative() && !rounded.is_zero(), words))
    }

    fn clause(&self, count: u128, noun: &Noun, spell: bool) -> Result<String> {
        let lexicon = self.grammar.lexicon();
        Ok(match (count, spell) {
            (1, true) => format!("{} {}", lexicon.noun_article(noun), noun.singular),
            (1, false) => format!("1 {}", noun.singular),
            (_, true) => format!("{} {}", self.grammar.spell_unsigned(count)?, noun.plural),
            (_, false) => format!("{count} {}", noun.plural),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> CurrencyFormatter {
        CurrencyFormatter::new(NumeralGrammar::luxembourgish().unwrap())
    }

    fn eur(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_euro_amounts() {
        let f = formatter();
        let cases = [
            (100, "een Euro"),
            (200, "zwee Euro"),
            (250, "zwee Euro a fofzeg Cent"),
            (101, "een Euro an een Cent"),
            (110, "een Euro an zéng Cent"),
            (121, "een Euro an eenanzwanzeg Cent"),
            (153, "een Euro an dräiafofzeg Cent"),
            (199, "een Euro an néngannonzeg Cent"),
            (1, "een Cent"),
            (0, "null Euro"),
        ];
        for (cents, expected) in cases {
            assert_eq!(f.format(eur(cents), "EUR").unwrap(), expected, "{cents}");
        }
    }

    #[test]
    fn test_other_currencies() {
        let f = formatter();
        assert_eq!(f.format(1, "GBP").unwrap(), "ee Pond");
        assert_eq!(f.format(eur(201), "GBP").unwrap(), "zwee Pond an ee Penny");
        assert_eq!(f.format(eur(305), "GBP").unwrap(), "dräi Pond a fënnef Pence");
        assert_eq!(f.format(1, "USD").unwrap(), "een Dollar");
        assert_eq!(f.format(1, "CNY").unwrap(), "ee Yuan");
        assert_eq!(f.format(1, "DEM").unwrap(), "eng Mark");
        assert_eq!(f.format(eur(1001), "dem").unwrap(), "zéng Mark an ee Pfennig");
    }

    #[test]
    fn test_rounding_and_sign() {
        let f = formatter();
        assert_eq!(f.format(Decimal::new(1005, 3), "EUR").unwrap(), "een Euro an een Cent");
        assert_eq!(f.format(Decimal::new(-1005, 3), "EUR").unwrap(), "minus een Euro an een Cent");
        assert_eq!(f.format(Decimal::new(-4, 3), "EUR").unwrap(), "null Euro");
        assert_eq!(f.format(-3, "EUR").unwrap(), "minus dräi Euro");
    }

    #[test]
    fn test_options() {
        let f = formatter();
        let options = CurrencyOptions {
            spell_minor: true,
            always_show_major: true,
        };
        assert_eq!(f.format_with(eur(1), "EUR", options).unwrap(), "null Euro an een Cent");

        let digits = formatter().with_options(CurrencyOptions {
            spell_minor: false,
            always_show_major: false,
        });
        assert_eq!(digits.format(eur(250), "EUR").unwrap(), "zwee Euro a 50 Cent");
    }

    #[test]
    fn test_unsupported_currency() {
        assert_eq!(
            formatter().format(1, "XYZ").unwrap_err(),
            NumeralError::UnsupportedCurrency {
                code: "XYZ".to_string()
            }
        );
    }
}
