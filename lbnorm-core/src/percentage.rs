//! Percentages ("zwee Komma fënnef Prozent")

use crate::decimal::DecimalFormatter;
use crate::error::{NumeralError, Result};
use crate::grammar::NumeralGrammar;
use crate::lexicon::Gender;
use crate::magnitude::Magnitude;

/// Spells percentages, honouring the lexicon's idiomatic overrides
#[derive(Debug, Clone)]
pub struct PercentageFormatter {
    grammar: NumeralGrammar,
}

impl PercentageFormatter {
    /// Create a formatter over `grammar`
    pub fn new(grammar: NumeralGrammar) -> Self {
        Self { grammar }
    }

    /// Spell a numeric percentage value
    pub fn format<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        let value = value.into().normalized();
        let lexicon = self.grammar.lexicon();
        let noun = lexicon.percent_noun();

        let words = match value.abs() {
            Magnitude::Integer(n) => {
                let n = self.grammar.unsigned(n, &value)?;
                if let Some(phrase) = lexicon.percentage_exception(n) {
                    phrase.to_string()
                } else if n == 1 {
                    format!("{} {noun}", lexicon.article(Gender::Neuter, noun))
                } else {
                    format!("{} {noun}", self.grammar.spell_unsigned(n)?)
                }
            }
            Magnitude::Decimal(d) => {
                let number = DecimalFormatter::new(self.grammar.clone()).format(d)?;
                format!("{number} {noun}")
            }
        };
        Ok(self.grammar.with_sign(value.is_negative(), words))
    }

    /// Spell a textual percentage such as "12,5 %" or "3.75"
    ///
    /// # Errors
    ///
    /// [`NumeralError::Parse`] when the text is not a number once the
    /// percent sign is stripped.
    pub fn parse(&self, text: &str) -> Result<String> {
        let stripped = text.trim();
        let stripped = stripped.strip_suffix('%').unwrap_or(stripped).trim_end();
        let value = Magnitude::parse(stripped).map_err(|_| NumeralError::Parse {
            input: text.to_string(),
        })?;
        self.format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn formatter() -> PercentageFormatter {
        PercentageFormatter::new(NumeralGrammar::luxembourgish().unwrap())
    }

    #[test]
    fn test_whole_percentages() {
        let f = formatter();
        assert_eq!(f.format(1).unwrap(), "ee Prozent");
        assert_eq!(f.format(2).unwrap(), "zwee Prozent");
        assert_eq!(f.format(0).unwrap(), "null Prozent");
        assert_eq!(f.format(100).unwrap(), "honnert Prozent");
        assert_eq!(f.format(-3).unwrap(), "minus dräi Prozent");
    }

    #[test]
    fn test_idiomatic_overrides() {
        let f = formatter();
        assert_eq!(f.format(25).unwrap(), "fënnefanzwanzeg Prozent");
        assert_eq!(f.format(50).unwrap(), "fofzeg Prozent");
        assert_eq!(f.format(75).unwrap(), "fënnefasiwwenzeg Prozent");
        assert_eq!(f.format(Decimal::new(500, 1)).unwrap(), "fofzeg Prozent");
    }

    #[test]
    fn test_fractional_percentages() {
        let f = formatter();
        assert_eq!(f.format(Decimal::new(25, 1)).unwrap(), "zwee Komma fënnef Prozent");
        assert_eq!(f.format(Decimal::new(11, 1)).unwrap(), "eent Komma eent Prozent");
        assert_eq!(
            f.format(Decimal::new(1275, 2)).unwrap(),
            "zwielef Komma fënnefasiwwenzeg Prozent"
        );
        assert_eq!(
            f.format(Decimal::new(3125, 3)).unwrap(),
            "dräi Komma eent zwee fënnef Prozent"
        );
    }

    #[test]
    fn test_textual_input() {
        let f = formatter();
        assert_eq!(f.parse("93,9%").unwrap(), "dräiannonzeg Komma néng Prozent");
        assert_eq!(f.parse("93.9 %").unwrap(), "dräiannonzeg Komma néng Prozent");
        assert_eq!(f.parse(" 1 ").unwrap(), "ee Prozent");
        assert_eq!(
            f.parse("vill%").unwrap_err(),
            NumeralError::Parse {
                input: "vill%".to_string()
            }
        );
    }
}
