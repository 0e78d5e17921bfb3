//! Output formatting for CLI commands

use anyhow::Result;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints `data` as a single JSON line in JSON mode, otherwise hands off
    /// to `text`
    pub fn emit<T, F>(&self, data: &T, text: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&Self),
    {
        match self.format {
            OutputFormat::Json => println!("{}", to_json(data)?),
            OutputFormat::Text => text(self),
        }
        Ok(())
    }

    /// Prints a plain line
    pub fn line(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a tab-separated table row
    pub fn row(&self, columns: &[&str]) {
        println!("{}", columns.join("\t"));
    }
}

fn to_json<T: Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string(data)
}
