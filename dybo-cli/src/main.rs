//! `dybo` command-line entry point

use anyhow::Result;
use clap::Parser;
use dybo_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "dybo", version, about = "Evaluate Dybo's Rule against an annotated Abkhaz verb corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
