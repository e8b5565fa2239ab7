// src/bin/cli.rs
use clap::Parser;
use slam_fetch::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    cli::run(&args)?;
    Ok(())
}
