//! marketseed CLI - turns a marketplace seed document into an idempotent SQL script

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::generate;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command.unwrap_or_default() {
        Commands::Generate(args) => generate::execute(&args, &cli.global),
    }
}

/// Install the logger. The level comes from `--verbose` only; no environment
/// variables are consulted.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
