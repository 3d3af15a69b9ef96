use anyhow::Result;
use clap::Parser;

use space_aces_bot::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
