//! Luxembourgish numeral grammar
//!
//! Spells integers, decimals, ordinals, years, money amounts and
//! percentages as Luxembourgish words. All lexical data comes from an
//! immutable [`Lexicon`] that is loaded once and shared.
//!
//! ```
//! use lbnorm_core::Numerals;
//!
//! let numerals = Numerals::luxembourgish().unwrap();
//! assert_eq!(numerals.to_cardinal(42).unwrap(), "zweeavéierzeg");
//! assert_eq!(numerals.to_year(1970).unwrap(), "nonzénghonnertsiwwenzeg");
//! ```

#![warn(missing_docs)]

pub mod currency;
pub mod decimal;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod magnitude;
pub mod percentage;
mod phonology;

pub use currency::{CurrencyFormatter, CurrencyOptions};
pub use decimal::DecimalFormatter;
pub use error::{NumeralError, Result};
pub use grammar::NumeralGrammar;
pub use lexicon::{Currency, Gender, Lexicon, Noun, Scale};
pub use magnitude::Magnitude;
pub use percentage::PercentageFormatter;
pub use rust_decimal::Decimal;

use std::sync::Arc;

/// All numeral services over one lexicon
#[derive(Debug, Clone)]
pub struct Numerals {
    grammar: NumeralGrammar,
    currency: CurrencyFormatter,
    percentage: PercentageFormatter,
    decimal: DecimalFormatter,
}

impl Numerals {
    /// Create the services over `lexicon`
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let grammar = NumeralGrammar::new(lexicon);
        Self {
            currency: CurrencyFormatter::new(grammar.clone()),
            percentage: PercentageFormatter::new(grammar.clone()),
            decimal: DecimalFormatter::new(grammar.clone()),
            grammar,
        }
    }

    /// Services over the built-in Luxembourgish lexicon
    pub fn luxembourgish() -> Result<Self> {
        Ok(Self::new(Lexicon::luxembourgish()?))
    }

    /// Use `options` for every currency amount
    pub fn with_currency_options(mut self, options: CurrencyOptions) -> Self {
        self.currency = self.currency.with_options(options);
        self
    }

    /// The underlying grammar
    pub fn grammar(&self) -> &NumeralGrammar {
        &self.grammar
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        self.grammar.lexicon()
    }

    /// Cardinal form ("zweeavéierzeg")
    pub fn to_cardinal<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        self.grammar.to_cardinal(value)
    }

    /// Ordinal form ("zweeavéierzegsten")
    pub fn to_ordinal<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        self.grammar.to_ordinal(value)
    }

    /// Year form ("nonzénghonnertsiwwenzeg")
    pub fn to_year<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        self.grammar.to_year(value)
    }

    /// Money amount ("zwee Euro a fofzeg Cent")
    pub fn to_currency<V: Into<Magnitude>>(&self, amount: V, code: &str) -> Result<String> {
        self.currency.format(amount, code)
    }

    /// Money amount with explicit options
    pub fn to_currency_with<V: Into<Magnitude>>(
        &self,
        amount: V,
        code: &str,
        options: CurrencyOptions,
    ) -> Result<String> {
        self.currency.format_with(amount, code, options)
    }

    /// Percentage of a numeric value ("fofzeg Prozent")
    pub fn to_percentage<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        self.percentage.format(value)
    }

    /// Percentage of a textual value ("12,5 %")
    pub fn parse_percentage(&self, text: &str) -> Result<String> {
        self.percentage.parse(text)
    }

    /// Decimal number ("dräi Komma fënnef")
    pub fn to_decimal(&self, value: Decimal) -> Result<String> {
        self.decimal.format(value)
    }

    /// Spell the digits after a decimal point
    pub fn fraction(&self, digits: &str) -> Result<String> {
        self.decimal.fraction(digits)
    }
}

/// Cardinal form using the built-in lexicon
pub fn to_cardinal<V: Into<Magnitude>>(value: V) -> Result<String> {
    Numerals::luxembourgish()?.to_cardinal(value)
}

/// Ordinal form using the built-in lexicon
pub fn to_ordinal<V: Into<Magnitude>>(value: V) -> Result<String> {
    Numerals::luxembourgish()?.to_ordinal(value)
}

/// Year form using the built-in lexicon
pub fn to_year<V: Into<Magnitude>>(value: V) -> Result<String> {
    Numerals::luxembourgish()?.to_year(value)
}

/// Money amount using the built-in lexicon
pub fn to_currency<V: Into<Magnitude>>(amount: V, code: &str) -> Result<String> {
    Numerals::luxembourgish()?.to_currency(amount, code)
}

/// Percentage using the built-in lexicon
pub fn to_percentage<V: Into<Magnitude>>(value: V) -> Result<String> {
    Numerals::luxembourgish()?.to_percentage(value)
}
