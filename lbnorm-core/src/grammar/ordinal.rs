use super::NumeralGrammar;
use crate::error::{NumeralError, Result};
use crate::magnitude::Magnitude;

impl NumeralGrammar {
    /// Spell an ordinal number ("drëtten", "eenanzwanzegsten")
    ///
    /// # Errors
    ///
    /// [`NumeralError::OrdinalRange`] for negative or fractional input,
    /// [`NumeralError::Range`] beyond the scale ceiling.
    pub fn to_ordinal<V: Into<Magnitude>>(&self, value: V) -> Result<String> {
        let value = value.into();
        let n = match value.normalized() {
            Magnitude::Integer(n) if n >= 0 => n.unsigned_abs(),
            _ => {
                return Err(NumeralError::OrdinalRange {
                    value: value.to_string(),
                })
            }
        };

        if let Some(word) = self.lexicon().ordinal_exception(n) {
            return Ok(word.to_string());
        }
        if n >= self.lexicon().ceiling() {
            return Err(self.range_error(n));
        }
        Ok(self.ordinal_from_stem(self.ordinal_stem(n)))
    }

    /// The cardinal fused into one lowercase word
    ///
    /// Scale nouns stay singular behind the compound form of their multiplier
    /// ("zweemillioun"). A lone singular scale noun loses its article
    /// ("millioun"); followed by a remainder it keeps "een"
    /// ("eenmilliouneent").
    pub(crate) fn ordinal_stem(&self, n: u128) -> String {
        self.fused(n, true)
    }

    fn fused(&self, n: u128, whole: bool) -> String {
        let lexicon = self.lexicon();
        let Some(noun) = lexicon.scale_noun_below(n) else {
            return self.decompose(n).text;
        };

        let (multiplier, remainder) = (n / noun.value, n % noun.value);
        let mut stem = if whole && multiplier == 1 && remainder == 0 {
            String::new()
        } else {
            self.compound_form(&self.fused(multiplier, false))
        };
        stem.push_str(&noun.singular.to_lowercase());
        if remainder > 0 {
            stem.push_str(&self.fused(remainder, false));
        }
        stem
    }

    /// Rewrite the first matching suffix rule, then append the ending
    pub(crate) fn ordinal_from_stem(&self, mut word: String) -> String {
        let lexicon = self.lexicon();
        if let Some((from, to)) = lexicon
            .ordinal_suffixes
            .iter()
            .find(|(from, _)| word.ends_with(from.as_str()))
        {
            word.truncate(word.len() - from.len());
            word.push_str(to);
        }
        word.push_str(&lexicon.ordinal_ending);
        word
    }
}
