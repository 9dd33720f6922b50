//! Application configuration.
//!
//! Values come from an optional TOML file; command-line flags are applied on
//! top by the binary.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mistakes.toml";

pub const DEFAULT_QUESTIONS_FILE: &str = "questions.json";
pub const DEFAULT_MISTAKES_FILE: &str = "bulk_practice/data/bulk_mistakes.json";
pub const DEFAULT_QUESTIONS_PER_DAY: usize = 40;
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub questions_path: PathBuf,
    pub mistakes_path: PathBuf,
    /// Width of one day in the question bank.
    pub questions_per_day: usize,
    /// Number of rows in the "top mistaken questions" table.
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            mistakes_path: PathBuf::from(DEFAULT_MISTAKES_FILE),
            questions_per_day: DEFAULT_QUESTIONS_PER_DAY,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `mistakes.toml` in the
    /// working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parses TOML text. Missing fields keep their defaults.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Rejects values the resolver cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions_per_day == 0 {
            return Err(ConfigError::Invalid(
                "questions_per_day must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
