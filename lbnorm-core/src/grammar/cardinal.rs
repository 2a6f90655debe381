//! Cardinal decomposition
//!
//! A value is divided by the largest scale not above it; the multiplier and
//! the remainder are decomposed recursively and the fragments merged back.

use super::NumeralGrammar;

/// A spelled part of a number together with the value it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub(crate) text: String,
    pub(crate) value: u128,
}

impl Fragment {
    fn new(text: impl Into<String>, value: u128) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

impl NumeralGrammar {
    pub(crate) fn decompose(&self, n: u128) -> Fragment {
        let lexicon = self.lexicon();
        if let Some(word) = lexicon.cardinal_exception(n) {
            return Fragment::new(word, n);
        }

        let Some(scale) = lexicon.scales().iter().find(|s| s.value <= n) else {
            // Only reachable with a lexicon that tabulates no decade words
            let digits = n
                .to_string()
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| self.decompose(d as u128).text)
                .collect::<Vec<_>>()
                .join(" ");
            return Fragment::new(digits, n);
        };

        let (multiplier, remainder) = (n / scale.value, n % scale.value);
        let head = self.decompose(multiplier);
        let mut merged = self.merge(head, Fragment::new(scale.singular.as_str(), scale.value));
        if remainder > 0 {
            merged = self.merge(merged, self.decompose(remainder));
        }
        merged
    }

    /// Join two adjacent fragments
    ///
    /// Multiplicative when `next` is a larger scale than `curr`, additive
    /// otherwise.
    pub(crate) fn merge(&self, curr: Fragment, next: Fragment) -> Fragment {
        let lexicon = self.lexicon();

        if next.value > curr.value {
            let text = match lexicon.scale_noun(next.value) {
                Some(noun) if curr.value == 1 => format!(
                    "{} {}",
                    lexicon.article(noun.gender, &noun.singular),
                    noun.singular
                ),
                Some(noun) => {
                    let count = match lexicon.dual(noun.gender) {
                        Some(dual) if curr.value == 2 => dual.to_string(),
                        _ => self.compound_form(&curr.text),
                    };
                    format!("{count} {}", noun.plural)
                }
                // "honnert", "dausend" and decade words take no "een"
                None if curr.value == 1 => next.text,
                None => format!("{}{}", self.compound_form(&curr.text), next.text),
            };
            return Fragment::new(text, curr.value * next.value);
        }

        let text = if curr.value < 100 && next.value < 10 {
            format!(
                "{}{}{}",
                self.compound_form(&next.text),
                lexicon.joiner_before(&curr.text),
                curr.text
            )
        } else if lexicon.scale_noun_below(curr.value).is_some() {
            format!("{} {}", curr.text, next.text)
        } else {
            format!("{}{}", curr.text, next.text)
        };
        Fragment::new(text, curr.value + next.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::NumeralGrammar;
    use crate::NumeralError;

    fn grammar() -> NumeralGrammar {
        NumeralGrammar::luxembourgish().unwrap()
    }

    #[test]
    fn test_tabulated_forms() {
        let g = grammar();
        assert_eq!(g.to_cardinal(0).unwrap(), "null");
        assert_eq!(g.to_cardinal(1).unwrap(), "eent");
        assert_eq!(g.to_cardinal(2).unwrap(), "zwee");
        assert_eq!(g.to_cardinal(16).unwrap(), "siechzéng");
        assert_eq!(g.to_cardinal(70).unwrap(), "siwwenzeg");
    }

    #[test]
    fn test_compounds_with_joiner() {
        let g = grammar();
        let cases = [
            (21, "eenanzwanzeg"),
            (23, "dräianzwanzeg"),
            (41, "eenavéierzeg"),
            (53, "dräiafofzeg"),
            (64, "véierasechzeg"),
            (75, "fënnefasiwwenzeg"),
            (81, "eenanachtzeg"),
            (99, "néngannonzeg"),
        ];
        for (n, expected) in cases {
            assert_eq!(g.to_cardinal(n).unwrap(), expected, "{n}");
        }
    }

    #[test]
    fn test_hundreds_and_thousands() {
        let g = grammar();
        let cases = [
            (100, "honnert"),
            (101, "honnerteent"),
            (142, "honnertzweeavéierzeg"),
            (200, "zweehonnert"),
            (999, "nénghonnertnéngannonzeg"),
            (1000, "dausend"),
            (1001, "dausendeent"),
            (1234, "dausendzweehonnertvéierandrësseg"),
            (2000, "zweedausend"),
            (21000, "eenanzwanzegdausend"),
            (101000, "honnerteendausend"),
        ];
        for (n, expected) in cases {
            assert_eq!(g.to_cardinal(n).unwrap(), expected, "{n}");
        }
    }

    #[test]
    fn test_scale_nouns() {
        let g = grammar();
        assert_eq!(g.to_cardinal(1_000_000).unwrap(), "eng Millioun");
        assert_eq!(g.to_cardinal(1_000_001).unwrap(), "eng Millioun eent");
        assert_eq!(g.to_cardinal(2_000_000).unwrap(), "zwou Milliounen");
        assert_eq!(
            g.to_cardinal(2_500_000).unwrap(),
            "zwou Milliounen fënnefhonnertdausend"
        );
        assert_eq!(g.to_cardinal(1_000_000_000).unwrap(), "eng Milliard");
        assert_eq!(
            g.to_cardinal(22_000_000u64).unwrap(),
            "zweeanzwanzeg Milliounen"
        );
        assert_eq!(
            g.to_cardinal(21_000_000_000u64).unwrap(),
            "eenanzwanzeg Milliarden"
        );
        assert_eq!(
            g.to_cardinal(3_001_000_000u64).unwrap(),
            "dräi Milliarden eng Millioun"
        );
    }

    #[test]
    fn test_negative() {
        let g = grammar();
        assert_eq!(g.to_cardinal(-5).unwrap(), "minus fënnef");
        assert_eq!(g.to_cardinal(-1).unwrap(), "minus eent");
    }

    #[test]
    fn test_range() {
        let g = grammar();
        let just_below = 10i128.pow(30) - 1;
        assert!(g.to_cardinal(just_below).is_ok());
        assert!(matches!(
            g.to_cardinal(10i128.pow(30)),
            Err(NumeralError::Range { .. })
        ));
        assert!(matches!(
            g.to_cardinal(-10i128.pow(31)),
            Err(NumeralError::Range { .. })
        ));
        assert!(matches!(
            g.to_cardinal(i128::MIN),
            Err(NumeralError::Range { .. })
        ));
    }
}
