//! Section entries
//!
//! File name format: `<chapter>.<section>[.<subsection>]_<name>.cpp`
//!
//! - `1.2_Kadane.cpp` is section 2 of chapter 1 with no subsection
//! - `1.2.3_Majority_Element_(Boyer-Moore).cpp` is subsection 3 of section 1.2
//!
//! The name may contain underscores; they become spaces in subsection headers.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static ENTRY_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?_(\S+)\.cpp$").unwrap()
});

/// Sort value for entries without a subsection, below every real subsection number
const NO_SUBSECTION: i64 = -1;

#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error(
        "{} is filed under chapter {expected} but its name says chapter {found}",
        .file.display()
    )]
    ChapterMismatch {
        file: PathBuf,
        expected: u32,
        found: u32,
    },
}

/// One source snippet parsed from its file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub chapter: u32,
    pub section: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<u32>,
    pub name: String,
    pub file_name: String,
}

impl SectionEntry {
    /// Parses a file name, returning `None` when it does not follow the convention
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = ENTRY_FILE_RE.captures(file_name)?;

        let chapter = caps[1].parse().ok()?;
        let section = caps[2].parse().ok()?;
        let subsection = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(Self {
            chapter,
            section,
            subsection,
            name: caps[4].to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Fails when the entry's chapter differs from the directory it was found in
    pub fn check_chapter(&self, expected: u32, dir: &Path) -> Result<(), EntryError> {
        if self.chapter == expected {
            return Ok(());
        }

        Err(EntryError::ChapterMismatch {
            file: dir.join(&self.file_name),
            expected,
            found: self.chapter,
        })
    }

    /// Subsection header text: underscores become spaces
    pub fn label(&self) -> String {
        self.name.replace('_', " ")
    }

    /// Sections below 1 are reserved and never typeset
    pub fn is_listed(&self) -> bool {
        self.section >= 1
    }

    fn sort_key(&self) -> (u32, u32, i64, &str, &str) {
        (
            self.chapter,
            self.section,
            self.subsection.map_or(NO_SUBSECTION, i64::from),
            &self.name,
            &self.file_name,
        )
    }
}

impl Ord for SectionEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SectionEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
