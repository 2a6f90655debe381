//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod normalize;
pub mod spell;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize text files or standard input for speech synthesis
    Normalize(normalize::NormalizeArgs),

    /// Spell a single number
    Spell(spell::SpellArgs),

    /// Check a custom lexicon or rule table file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Normalize(args) => args.execute(),
            Commands::Spell(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
