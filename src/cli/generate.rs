//! Generate command

use anyhow::Result;

use super::output::Output;
use crate::storage::{Book, ChapterGenerator};

/// Regenerates every chapter of the book
pub fn run(book: &Book, output: &Output) -> Result<()> {
    let reports = ChapterGenerator::new(book).generate_all()?;

    output.emit(&reports, |out| {
        if reports.is_empty() {
            out.line(&format!(
                "No chapter directories found in {}",
                book.root().display()
            ));
            return;
        }

        for report in &reports {
            let path = book
                .relative_path(&report.path)
                .unwrap_or_else(|| report.path.clone());
            out.line(&format!(
                "Wrote {} ({} sections, {} listings)",
                path.display(),
                report.sections,
                report.listings
            ));
        }
    })
}
