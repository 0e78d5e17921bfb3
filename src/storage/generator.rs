//! Chapter generation
//!
//! Scans each chapter, assembles its document and writes `chapter<N>.tex`.
//! Chapters are handled one at a time; the first failure stops the run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use super::Book;
use crate::domain::{Chapter, Document, SectionTitles};

/// Summary of one written chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterReport {
    pub chapter: u32,
    pub title: String,
    pub path: PathBuf,
    pub sections: usize,
    pub listings: usize,
}

/// Writes chapter documents for a book
pub struct ChapterGenerator<'a> {
    book: &'a Book,
    titles: SectionTitles,
}

impl<'a> ChapterGenerator<'a> {
    /// Creates a generator using the built-in section titles
    pub fn new(book: &'a Book) -> Self {
        Self::with_titles(book, SectionTitles::builtin())
    }

    pub fn with_titles(book: &'a Book, titles: SectionTitles) -> Self {
        Self { book, titles }
    }

    /// Builds a chapter's document without writing it.
    ///
    /// The whole chapter is scanned first, so a misplaced file fails before
    /// any source is read.
    pub fn render(&self, chapter: &Chapter) -> Result<Document> {
        let entries = self.book.scan_chapter(chapter)?;

        Document::assemble(chapter, &entries, &self.titles, |entry| {
            let path = chapter.dir.join(&entry.file_name);
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))
        })
    }

    /// Generates one chapter, replacing any previous output
    pub fn generate(&self, chapter: &Chapter) -> Result<ChapterReport> {
        self.book.require_book_dir()?;

        let document = self.render(chapter)?;
        let path = self.book.output_path(chapter);

        fs::write(&path, document.render())
            .with_context(|| format!("Failed to write chapter: {}", path.display()))?;

        tracing::info!(
            chapter = chapter.number,
            path = %path.display(),
            listings = document.listing_count(),
            "wrote chapter"
        );

        Ok(ChapterReport {
            chapter: chapter.number,
            title: chapter.title(),
            path,
            sections: document.section_count(),
            listings: document.listing_count(),
        })
    }

    /// Generates every chapter of the book in directory-name order
    pub fn generate_all(&self) -> Result<Vec<ChapterReport>> {
        let chapters = self.book.chapters()?;
        tracing::debug!(count = chapters.len(), "generating chapters");

        chapters
            .iter()
            .map(|chapter| self.generate(chapter))
            .collect()
    }
}
