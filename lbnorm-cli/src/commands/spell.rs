//! Spell command implementation

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lbnorm_core::{CurrencyOptions, Lexicon, Magnitude, Numerals};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the spell command
#[derive(Debug, Args)]
pub struct SpellArgs {
    /// Form to produce
    #[command(subcommand)]
    pub form: SpellForm,

    /// Custom lexicon file
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Spelling registers
#[derive(Debug, Subcommand)]
pub enum SpellForm {
    /// Cardinal number ("42", "-3", "2,5")
    Cardinal {
        /// Number, with "," or "." as decimal separator
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Ordinal number
    Ordinal {
        /// Whole number
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Calendar year
    Year {
        /// Year number
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Money amount
    Currency {
        /// Amount ("2,50")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// ISO currency code
        #[arg(short, long, default_value = "EUR")]
        code: String,

        /// Keep the cent count as digits
        #[arg(long)]
        minor_digits: bool,

        /// Read "null Euro" before a cent-only amount
        #[arg(long)]
        show_major: bool,
    },

    /// Percentage ("12,5" or "12,5%")
    Percentage {
        /// Value, optionally with a trailing "%"
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

impl SpellArgs {
    /// Execute the spell command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.spell()?);
        Ok(())
    }

    /// Words for the requested value
    pub fn spell(&self) -> Result<String> {
        let numerals = match &self.lexicon {
            Some(path) => Numerals::new(Arc::new(Lexicon::from_file(path)?)),
            None => Numerals::luxembourgish()?,
        };

        let words = match &self.form {
            SpellForm::Cardinal { value } => numerals.to_cardinal(parse(value)?)?,
            SpellForm::Ordinal { value } => numerals.to_ordinal(parse(value)?)?,
            SpellForm::Year { value } => numerals.to_year(parse(value)?)?,
            SpellForm::Currency {
                amount,
                code,
                minor_digits,
                show_major,
            } => numerals.to_currency_with(
                parse(amount)?,
                &code.to_ascii_uppercase(),
                CurrencyOptions {
                    spell_minor: !minor_digits,
                    always_show_major: *show_major,
                },
            )?,
            SpellForm::Percentage { value } => numerals.parse_percentage(value)?,
        };
        Ok(words)
    }
}

fn parse(value: &str) -> Result<Magnitude> {
    Magnitude::parse(value).with_context(|| format!("'{value}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(form: SpellForm) -> Result<String> {
        SpellArgs {
            form,
            lexicon: None,
        }
        .spell()
    }

    #[test]
    fn test_registers() {
        let value = || "1970".to_string();
        assert_eq!(
            spell(SpellForm::Cardinal { value: value() }).unwrap(),
            "dausendnénghonnertsiwwenzeg"
        );
        assert_eq!(
            spell(SpellForm::Year { value: value() }).unwrap(),
            "nonzénghonnertsiwwenzeg"
        );
        assert_eq!(
            spell(SpellForm::Ordinal {
                value: "22".to_string()
            })
            .unwrap(),
            "zweeanzwanzegsten"
        );
        assert_eq!(
            spell(SpellForm::Percentage {
                value: "25%".to_string()
            })
            .unwrap(),
            "fënnefanzwanzeg Prozent"
        );
    }

    #[test]
    fn test_currency_options() {
        let currency = |amount: &str, code: &str, show_major| SpellForm::Currency {
            amount: amount.to_string(),
            code: code.to_string(),
            minor_digits: false,
            show_major,
        };
        assert_eq!(
            spell(currency("2,50", "eur", false)).unwrap(),
            "zwee Euro a fofzeg Cent"
        );
        assert_eq!(
            spell(currency("0,01", "EUR", true)).unwrap(),
            "null Euro an een Cent"
        );
        assert!(spell(currency("1", "CHF", false)).is_err());
    }

    #[test]
    fn test_not_a_number() {
        let err = spell(SpellForm::Cardinal {
            value: "zwielef".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "'zwielef' is not a number");
    }
}
