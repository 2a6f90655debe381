//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::{ArgGroup, Args};
use lbnorm_core::Lexicon;
use lbnorm_engine::Normalizer;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("tables")
        .required(true)
        .multiple(true)
        .args(["lexicon", "rules"])
))]
pub struct ValidateArgs {
    /// Lexicon file to validate
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Rule table file to validate (its patterns are compiled too)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.lexicon {
            println!("Validating lexicon: {}", path.display());
            match Lexicon::from_file(path) {
                Ok(lexicon) => {
                    println!("✓ Lexicon is valid!");
                    println!("  Language code: {}", lexicon.code());
                    println!("  Language name: {}", lexicon.name());
                    println!("  Revision: {}", lexicon.revision());
                }
                Err(e) => return Err(invalid("Lexicon", e)),
            }
        }

        if let Some(path) = &self.rules {
            println!("Validating rule table: {}", path.display());
            let mut builder = Normalizer::builder().rules_file(path);
            if let Some(lexicon) = &self.lexicon {
                builder = builder.lexicon_file(lexicon);
            }
            match builder.build() {
                Ok(normalizer) => {
                    let rules = normalizer.rules();
                    println!("✓ Rule table is valid!");
                    println!("  Language code: {}", rules.code());
                    println!("  Language name: {}", rules.name());
                    println!("  Units: {}", rules.units().len());
                }
                Err(e) => return Err(invalid("Rule table", e)),
            }
        }

        Ok(())
    }
}

fn invalid(what: &str, error: impl std::fmt::Display) -> anyhow::Error {
    println!("✗ {what} is invalid!");
    println!("  Error: {error}");
    CliError::ValidationFailed(error.to_string()).into()
}
