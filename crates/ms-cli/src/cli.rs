//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// marketseed - generate an idempotent SQL seed script for the popup marketplace
#[derive(Parser, Debug)]
#[command(name = "marketseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory; input and output paths resolve against it
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path (default: <project-dir>/marketseed.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the seed document and write the SQL script
    Generate(GenerateArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(GenerateArgs::default())
    }
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Override the seed document path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the SQL script path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Validate and build the script without writing it
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
