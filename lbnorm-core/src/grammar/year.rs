use super::NumeralGrammar;
use crate::error::{NumeralError, Result};
use crate::magnitude::Magnitude;

/// Years from here on are read in hundreds ("eelefhonnert…")
const FIRST_SPLIT_YEAR: u128 = 1100;
/// Years above this are read as plain cardinals
const LAST_SPLIT_YEAR: u128 = 9999;

impl NumeralGrammar {
    /// Spell a year
    ///
    /// 1100–1999 and years with a non-zero hundreds digit are read as
    /// "<century> honnert <rest>" written solid; everything else, including
    /// the 2000s, is read as a cardinal.
    ///
    /// # Errors
    ///
    /// [`NumeralError::Range`] for fractional or out-of-range input.
    pub fn to_year<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        let value = value.into();
        let Some(year) = value.as_integer() else {
            return Err(NumeralError::Range {
                value: value.to_string(),
                limit: "whole years".to_string(),
            });
        };
        let words = self.spell_year(self.unsigned(year, &value)?)?;
        Ok(self.with_sign(year < 0, words))
    }

    fn spell_year(&self, year: u128) -> Result<String> {
        let lexicon = self.lexicon();
        if let Some(word) = lexicon.year_exception(year) {
            return Ok(word.to_string());
        }

        let (century, rest) = (year / 100, year % 100);
        let outside_split_range = !(FIRST_SPLIT_YEAR..=LAST_SPLIT_YEAR).contains(&year);
        let round_modern_hundred = rest == 0 && !(FIRST_SPLIT_YEAR..2000).contains(&year);
        if outside_split_range || century % 10 == 0 || round_modern_hundred {
            return self.spell_unsigned(year);
        }

        let mut words = match lexicon.year_exception(century * 100) {
            Some(prefix) => prefix.to_string(),
            None => format!(
                "{}{}",
                self.compound_form(&self.spell_unsigned(century)?),
                lexicon.year_hundred
            ),
        };
        if rest > 0 {
            words.push_str(&self.spell_unsigned(rest)?);
        }
        Ok(words)
    }
}
