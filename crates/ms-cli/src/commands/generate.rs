//! Generate command implementation

use anyhow::{Context, Result};
use ms_core::{Config, SeedDocument};
use std::path::{Path, PathBuf};

use crate::cli::{GenerateArgs, GlobalArgs};

/// Load the config, applying `--config` when given
fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            if let Some(path) = Config::find_in_dir(&global.project_dir) {
                println!("Using config {}", path.display());
            }
            Config::load_from_dir(&global.project_dir).context("Failed to load config")
        }
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

/// Execute the generate command
pub fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global)?;
    if let Some(input) = &args.input {
        config.input_path = path_string(input);
    }
    if let Some(output) = &args.output {
        config.output_path = path_string(output);
    }

    let input: PathBuf = config.input_path_absolute(&global.project_dir);
    let output: PathBuf = config.output_path_absolute(&global.project_dir);
    log::debug!("Reading seed document from {}", input.display());

    let document = SeedDocument::load(&input).context("Failed to load seed document")?;
    let script = ms_sql::generate(&document, &config).context("Seed document is invalid")?;

    if args.check {
        println!(
            "Seed document is valid ({} statements)",
            script.statements().len()
        );
        return Ok(());
    }

    script
        .write(&output)
        .context("Failed to write SQL seed script")?;
    println!("Generated SQL seed script at {}", output.display());
    Ok(())
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
