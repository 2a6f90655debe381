//! lbnorm command-line entry point

use clap::Parser;
use lbnorm_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);
    cli.command.execute()
}
