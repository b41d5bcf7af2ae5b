//! Generator configuration and parsing for marketseed.yml
//!
//! Every field has a default, and a missing config file means "use the
//! defaults", so a bare `marketseed` run reads `itdaing_seed.json` and writes
//! `scripts/seed_market_from_json.sql` relative to the project directory.

use crate::error::{SeedError, SeedResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAMES: [&str; 2] = ["marketseed.yml", "marketseed.yaml"];

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed document to read
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// SQL script to write (overwritten on every run)
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Tag embedded in the seed marker of generated free-text fields
    #[serde(default = "default_seed_tag")]
    pub seed_tag: String,

    /// Launch date popup windows are spread around
    #[serde(default = "default_base_date")]
    pub base_date: NaiveDate,
}

fn default_input_path() -> String {
    "itdaing_seed.json".to_string()
}

fn default_output_path() -> String {
    "scripts/seed_market_from_json.sql".to_string()
}

fn default_seed_tag() -> String {
    "itdaing_json".to_string()
}

fn default_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 8).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            seed_tag: default_seed_tag(),
            base_date: default_base_date(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> SeedResult<Self> {
        if !path.exists() {
            return Err(SeedError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SeedError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    ///
    /// Looks for marketseed.yml or marketseed.yaml and falls back to the
    /// defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> SeedResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Config file `load_from_dir` would read, if the directory has one
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    fn validate(&self) -> SeedResult<()> {
        if self.input_path.trim().is_empty() {
            return Err(SeedError::ConfigInvalid {
                message: "input_path cannot be empty".to_string(),
            });
        }
        if self.output_path.trim().is_empty() {
            return Err(SeedError::ConfigInvalid {
                message: "output_path cannot be empty".to_string(),
            });
        }
        if self.seed_tag.trim().is_empty() {
            return Err(SeedError::ConfigInvalid {
                message: "seed_tag cannot be empty".to_string(),
            });
        }
        // The marker is matched with LIKE, so a '%' would widen the cleanup.
        if self.seed_tag.contains(['\'', '%']) {
            return Err(SeedError::ConfigInvalid {
                message: format!("seed_tag '{}' must not contain quotes or '%'", self.seed_tag),
            });
        }
        Ok(())
    }

    /// Marker embedded in generated descriptions and notices
    pub fn seed_marker(&self) -> String {
        format!("[seed:{}]", self.seed_tag)
    }

    /// Input path resolved against the project directory
    pub fn input_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.input_path)
    }

    /// Output path resolved against the project directory
    pub fn output_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.output_path)
    }

    /// File name of the input, used in the generated script header
    pub fn source_name(&self) -> String {
        Path::new(&self.input_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.clone())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
