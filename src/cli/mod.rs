//! # Command-Line Interface
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `codebook` | Regenerate every `chapter<N>.tex` |
//! | `codebook generate` | Same as above |
//! | `codebook list` | Show chapters and entries in typesetting order |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. `--verbose` raises the level to
//! debug; `RUST_LOG` overrides both.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod generate;
mod list;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
