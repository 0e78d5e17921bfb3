//! Book project access
//!
//! A book project is a directory holding chapter directories
//! (`1-Elementary-Algorithms/`, `2-Data-Structures/`, ...) and the output
//! directory that receives the generated `chapter<N>.tex` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::Config;
use crate::domain::{Chapter, SectionEntry};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Not in a codebook project: no codebook.toml or Book/ directory found. Pass --root to choose one.")]
    NotInProject,

    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Book directory does not exist: {0}")]
    MissingBookDir(PathBuf),
}

/// A codebook project rooted at a directory
#[derive(Debug, Clone)]
pub struct Book {
    root: PathBuf,
    config: Config,
}

impl Book {
    /// Opens the project at the given root
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(BookError::NotADirectory(root).into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(BookError::NotInProject)?;

        Self::open(root)
    }

    /// Overrides the configured output directory
    pub fn with_book_dir(mut self, book_dir: impl Into<PathBuf>) -> Self {
        self.config.book_dir = book_dir.into();
        self
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the directory receiving generated chapters
    pub fn book_dir(&self) -> PathBuf {
        self.root.join(&self.config.book_dir)
    }

    /// Returns the generated document path for a chapter
    pub fn output_path(&self, chapter: &Chapter) -> PathBuf {
        self.book_dir().join(chapter.output_file_name())
    }

    /// Fails unless the output directory exists
    pub fn require_book_dir(&self) -> Result<PathBuf> {
        let dir = self.book_dir();
        if !dir.is_dir() {
            return Err(BookError::MissingBookDir(dir).into());
        }
        Ok(dir)
    }

    /// Returns a path relative to the project root, if it is inside it
    pub fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(&self.root).ok().map(|p| p.to_path_buf())
    }

    /// Discovers chapter directories, ordered by directory name
    pub fn chapters(&self) -> Result<Vec<Chapter>> {
        let read_dir = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read project root: {}", self.root.display()))?;

        let mut chapters = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry
                .with_context(|| format!("Failed to read project root: {}", self.root.display()))?;
            let path = dir_entry.path();

            if !path.is_dir() {
                continue;
            }

            match Chapter::from_dir(&path) {
                Some(chapter) => {
                    tracing::debug!(chapter = chapter.number, dir = %path.display(), "found chapter");
                    chapters.push(chapter);
                }
                None => {
                    tracing::debug!(dir = %path.display(), "skipping directory outside naming convention");
                }
            }
        }

        chapters.sort_by(|a, b| a.dir.file_name().cmp(&b.dir.file_name()));
        Ok(chapters)
    }

    /// Lists a chapter's entries in typesetting order.
    ///
    /// Fails if any file names a different chapter than the directory it sits
    /// in. Files outside the naming convention are ignored.
    pub fn scan_chapter(&self, chapter: &Chapter) -> Result<Vec<SectionEntry>> {
        let read_dir = fs::read_dir(&chapter.dir).with_context(|| {
            format!("Failed to read chapter directory: {}", chapter.dir.display())
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.with_context(|| {
                format!("Failed to read chapter directory: {}", chapter.dir.display())
            })?;
            let file_name = dir_entry.file_name();

            let Some(entry) = file_name.to_str().and_then(SectionEntry::parse) else {
                tracing::debug!(file = ?file_name, chapter = chapter.number, "skipping file outside naming convention");
                continue;
            };

            entry.check_chapter(chapter.number, &chapter.dir)?;
            entries.push(entry);
        }

        entries.sort();
        Ok(entries)
    }
}
