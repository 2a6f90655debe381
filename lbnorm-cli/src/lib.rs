//! lbnorm CLI library
//!
//! Command-line front end for the Luxembourgish normalizer: normalize files
//! or standard input, spell single numbers, and check custom data files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

use clap::Parser;
use commands::Commands;

/// Luxembourgish text normalization for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "lbnorm", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install env_logger; `RUST_LOG` still wins over the flags
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level());
        // A logger may already be installed when running under a test harness
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
