//! Chapter directories
//!
//! A chapter is a top-level directory named `<number>-<name>`, e.g.
//! `1-Elementary-Algorithms`. The number becomes the output file name
//! (`chapter1.tex`) and the name, with hyphens turned into spaces, becomes the
//! chapter title.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static CHAPTER_DIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-(\S+)$").unwrap());

/// A chapter discovered from a directory name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Chapter number from the directory prefix
    pub number: u32,

    /// Raw directory suffix after the first hyphen
    pub name: String,

    /// Path of the chapter directory
    pub dir: PathBuf,
}

impl Chapter {
    /// Parses a directory name into its chapter number and name.
    ///
    /// Returns `None` for names outside the convention, including numbers too
    /// large for a `u32`.
    pub fn parse_dir_name(dir_name: &str) -> Option<(u32, String)> {
        let caps = CHAPTER_DIR_RE.captures(dir_name)?;
        let number = caps[1].parse().ok()?;
        Some((number, caps[2].to_string()))
    }

    /// Builds a chapter from a directory path, if its name follows the convention
    pub fn from_dir(dir: &Path) -> Option<Self> {
        let dir_name = dir.file_name()?.to_str()?;
        let (number, name) = Self::parse_dir_name(dir_name)?;

        Some(Self {
            number,
            name,
            dir: dir.to_path_buf(),
        })
    }

    /// Chapter title as typeset: hyphens become spaces
    pub fn title(&self) -> String {
        self.name.replace('-', " ")
    }

    /// File name of the generated document for this chapter
    pub fn output_file_name(&self) -> String {
        format!("chapter{}.tex", self.number)
    }
}
