//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use lbnorm_core::Lexicon;
use lbnorm_engine::{PassId, STANDARD_ORDER};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the normalization passes in execution order
    Passes,

    /// List the supported currency codes
    Currencies,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let lines = match self {
            ListCommands::Passes => pass_lines(),
            ListCommands::Currencies => {
                let lexicon = Lexicon::luxembourgish()?;
                currency_lines(&lexicon)
            }
        };
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

fn pass_lines() -> Vec<String> {
    let mut seen = Vec::<PassId>::new();
    STANDARD_ORDER
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let again = if seen.contains(id) { " (again)" } else { "" };
            seen.push(*id);
            format!("{:>2}. {id}{again}", i + 1)
        })
        .collect()
}

fn currency_lines(lexicon: &Lexicon) -> Vec<String> {
    let mut codes: Vec<&str> = lexicon.currency_codes().collect();
    codes.sort_unstable();
    codes
        .into_iter()
        .filter_map(|code| lexicon.currency(code))
        .map(|c| format!("{}  {} / {}", c.code, c.major.singular, c.minor.singular))
        .collect()
}
