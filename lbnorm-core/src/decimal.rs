//! Decimal numbers ("dräi Komma fënnef")

use crate::error::{NumeralError, Result};
use crate::grammar::NumeralGrammar;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Spells decimal numbers as "<integer> Komma <fraction>"
#[derive(Debug, Clone)]
pub struct DecimalFormatter {
    grammar: NumeralGrammar,
}

impl DecimalFormatter {
    /// Create a formatter over `grammar`
    pub fn new(grammar: NumeralGrammar) -> Self {
        Self { grammar }
    }

    /// Spell a decimal number; whole values are read as plain cardinals
    pub fn format(&self, value: Decimal) -> Result<String> {
        let value = value.normalize();
        let abs = value.abs();
        let integer = abs
            .trunc()
            .to_u128()
            .ok_or_else(|| NumeralError::Range {
                value: value.to_string(),
                limit: self.grammar.lexicon().ceiling().to_string(),
            })?;

        let mut words = self.grammar.spell_unsigned(integer)?;
        let text = abs.to_string();
        if let Some((_, fraction)) = text.split_once('.') {
            words.push(' ');
            words.push_str(self.grammar.lexicon().point_word());
            words.push(' ');
            words.push_str(&self.fraction(fraction)?);
        }
        Ok(self
            .grammar
            .with_sign(value.is_sign_negative() && !value.is_zero(), words))
    }

    /// Spell the digits after the decimal point
    ///
    /// A single digit or a two-digit group without a leading zero is read
    /// as one number; anything else digit by digit.
    pub fn fraction(&self, digits: &str) -> Result<String> {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(NumeralError::Parse {
                input: digits.to_string(),
            });
        }

        let compact = digits.len() == 1 || (digits.len() == 2 && !digits.starts_with('0'));
        if compact {
            let n = digits.parse::<u128>().map_err(|_| NumeralError::Parse {
                input: digits.to_string(),
            })?;
            return self.grammar.spell_unsigned(n);
        }

        let spelled = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| self.grammar.spell_unsigned(u128::from(d)))
            .collect::<Result<Vec<_>>>()?;
        Ok(spelled.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> DecimalFormatter {
        DecimalFormatter::new(NumeralGrammar::luxembourgish().unwrap())
    }

    #[test]
    fn test_decimal_numbers() {
        let f = formatter();
        assert_eq!(f.format(Decimal::new(35, 1)).unwrap(), "dräi Komma fënnef");
        assert_eq!(f.format(Decimal::new(11, 1)).unwrap(), "eent Komma eent");
        assert_eq!(f.format(Decimal::new(1225, 2)).unwrap(), "zwielef Komma fënnefanzwanzeg");
        assert_eq!(f.format(Decimal::new(305, 2)).unwrap(), "dräi Komma null fënnef");
        assert_eq!(
            f.format(Decimal::new(31415, 4)).unwrap(),
            "dräi Komma eent véier eent fënnef"
        );
        assert_eq!(f.format(Decimal::new(-25, 1)).unwrap(), "minus zwee Komma fënnef");
        assert_eq!(f.format(Decimal::new(500, 2)).unwrap(), "fënnef");
    }

    #[test]
    fn test_fraction_rejects_non_digits() {
        assert!(formatter().fraction("1a").is_err());
        assert!(formatter().fraction("").is_err());
    }
}
