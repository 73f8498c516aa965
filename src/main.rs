use anyhow::Result;
use clap::Parser;

use datamill::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
