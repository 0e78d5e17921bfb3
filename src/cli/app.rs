//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{generate, list};
use crate::storage::Book;

#[derive(Parser)]
#[command(name = "codebook")]
#[command(author, version, about = "Generate per-chapter LaTeX listings for a codebook")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory holding codebook.toml or Book/)
    #[arg(long, global = true, env = "CODEBOOK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output directory for chapter files, relative to the project root
    #[arg(long, global = true, env = "CODEBOOK_BOOK_DIR", value_name = "DIR")]
    pub book_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Regenerate every chapter (the default)
    Generate,

    /// Show chapters and their entries without writing anything
    List,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = Output::new(cli.format);
    let book = open_book(cli.root.as_deref(), cli.book_dir)?;
    tracing::debug!(root = %book.root().display(), book_dir = %book.book_dir().display(), "opened project");

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => generate::run(&book, &output)?,
        Commands::List => list::run(&book, &output)?,
    }

    Ok(())
}

fn open_book(root: Option<&Path>, book_dir: Option<PathBuf>) -> Result<Book> {
    let book = match root {
        Some(root) => Book::open(root)?,
        None => Book::open_current()?,
    };

    Ok(match book_dir {
        Some(dir) => book.with_book_dir(dir),
        None => book,
    })
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
