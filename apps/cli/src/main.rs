//! Wero data bundler CLI.
//!
//! Bundles the per-country, per-bank `data.json` tree into one consolidated
//! document for the wero-tracker web client.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing();
    commands::run(cli)
}
