//! List command
//!
//! Shows what generation would typeset, in order, without writing anything.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use super::output::Output;
use crate::domain::{SectionEntry, SectionTitles};
use crate::storage::Book;

#[derive(Serialize)]
struct ChapterListing {
    chapter: u32,
    title: String,
    dir: PathBuf,
    output: PathBuf,
    entries: Vec<EntryListing>,
}

#[derive(Serialize)]
struct EntryListing {
    #[serde(flatten)]
    entry: SectionEntry,
    section_title: String,
    listed: bool,
}

/// Lists chapters and their sorted entries
pub fn run(book: &Book, output: &Output) -> Result<()> {
    let titles = SectionTitles::builtin();
    let mut listings = Vec::new();

    for chapter in book.chapters()? {
        let entries = book
            .scan_chapter(&chapter)?
            .into_iter()
            .map(|entry| EntryListing {
                section_title: titles.title(entry.chapter, entry.section).to_string(),
                listed: entry.is_listed(),
                entry,
            })
            .collect();

        listings.push(ChapterListing {
            chapter: chapter.number,
            title: chapter.title(),
            output: book.output_path(&chapter),
            dir: chapter.dir,
            entries,
        });
    }

    output.emit(&listings, |out| {
        if listings.is_empty() {
            out.line(&format!(
                "No chapter directories found in {}",
                book.root().display()
            ));
            return;
        }

        for listing in &listings {
            out.line(&format!("Chapter {}: {}", listing.chapter, listing.title));
            for item in &listing.entries {
                let number = section_number(&item.entry);
                let heading = if item.listed {
                    item.section_title.as_str()
                } else {
                    "(not listed)"
                };
                out.row(&["", number.as_str(), heading, item.entry.file_name.as_str()]);
            }
        }
    })
}

fn section_number(entry: &SectionEntry) -> String {
    match entry.subsection {
        Some(sub) => format!("{}.{}.{}", entry.chapter, entry.section, sub),
        None => format!("{}.{}", entry.chapter, entry.section),
    }
}
