//! Configuration handling for codebook generation
//!
//! Configuration is optional and lives in `codebook.toml` at the project root.
//! The only setting is where generated chapters are written:
//!
//! ```toml
//! book_dir = "Book"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional project configuration file
pub const CONFIG_FILE: &str = "codebook.toml";

/// Output directory used when nothing else is configured
pub const DEFAULT_BOOK_DIR: &str = "Book";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory (relative to the project root) receiving `chapter<N>.tex`
    pub book_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_dir: PathBuf::from(DEFAULT_BOOK_DIR),
        }
    }
}

impl Config {
    /// Loads configuration for a project, falling back to defaults when
    /// `codebook.toml` is absent
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.book_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("book_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Finds the project root by walking up from the current directory
    pub fn find_project_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_project_root_from(&current)
    }

    /// Finds the nearest directory at or above `start` that holds a
    /// `codebook.toml` or a `Book/` directory
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE).is_file() || current.join(DEFAULT_BOOK_DIR).is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
