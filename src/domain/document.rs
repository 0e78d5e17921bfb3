//! Chapter documents
//!
//! A [`Document`] is the ordered list of blocks making up one `chapter<N>.tex`.
//! Assembly walks the sorted entries of a chapter and decides where section,
//! counter and subsection markup goes; rendering turns the blocks into LaTeX.
//!
//! ```text
//! \chapter{Elementary Algorithms}
//!
//! \section{Array Transformations}
//! \setcounter{section}{1}
//! \setcounter{subsection}{0}
//! \subsection{Sorting Algorithms}
//! \begin{lstlisting}
//! ...file contents...
//! \end{lstlisting}
//! ```

use super::{Chapter, SectionEntry, SectionTitles};

const LISTING_BEGIN: &str = "\\begin{lstlisting}\n";
const LISTING_END: &str = "\\end{lstlisting}\n";

/// One piece of generated markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `\chapter{...}`
    Title(String),

    /// `\section{...}` followed by `\setcounter{section}{number}`
    Section { number: u32, title: String },

    /// `\setcounter{subsection}{0}`
    SubsectionReset,

    /// `\subsection{...}`
    Subsection(String),

    /// Verbatim file contents inside a listing environment; `file_name` is
    /// the snippet it was read from
    Listing { file_name: String, source: String },
}

/// Generated document for one chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    chapter: u32,
    blocks: Vec<Block>,
}

impl Document {
    /// Assembles the document for `chapter` from its sorted entries.
    ///
    /// `load` is called once per typeset entry, in output order, to fetch the
    /// file contents. Entries in sections below 1 are skipped without loading.
    pub fn assemble<F, E>(
        chapter: &Chapter,
        entries: &[SectionEntry],
        titles: &SectionTitles,
        mut load: F,
    ) -> Result<Self, E>
    where
        F: FnMut(&SectionEntry) -> Result<String, E>,
    {
        let mut blocks = vec![Block::Title(chapter.title())];
        let mut prev_section = None;

        for entry in entries.iter().filter(|e| e.is_listed()) {
            if prev_section != Some(entry.section) {
                blocks.push(Block::Section {
                    number: entry.section,
                    title: titles.title(entry.chapter, entry.section).to_string(),
                });
                if entry.subsection.is_some() {
                    blocks.push(Block::SubsectionReset);
                }
            }

            if entry.subsection.is_some() {
                blocks.push(Block::Subsection(entry.label()));
            }

            blocks.push(Block::Listing {
                file_name: entry.file_name.clone(),
                source: load(entry)?,
            });
            prev_section = Some(entry.section);
        }

        Ok(Self {
            chapter: chapter.number,
            blocks,
        })
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of section headers
    pub fn section_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Section { .. }))
            .count()
    }

    /// Number of embedded listings
    pub fn listing_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Listing { .. }))
            .count()
    }

    /// Renders the document as LaTeX.
    ///
    /// Listing contents are copied byte for byte, so a source without a
    /// trailing newline ends on the same line as `\end{lstlisting}`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Title(title) => append_title(&mut out, title),
                Block::Section { number, title } => append_section(&mut out, *number, title),
                Block::SubsectionReset => out.push_str("\\setcounter{subsection}{0}\n"),
                Block::Subsection(label) => append_subsection(&mut out, label),
                Block::Listing { source, .. } => append_listing(&mut out, source),
            }
        }
        out
    }
}

fn append_title(out: &mut String, title: &str) {
    out.push_str(&format!("\\chapter{{{}}}\n", title));
}

fn append_section(out: &mut String, number: u32, title: &str) {
    out.push_str(&format!("\n\\section{{{}}}\n", title));
    out.push_str(&format!("\\setcounter{{section}}{{{}}}\n", number));
}

fn append_subsection(out: &mut String, label: &str) {
    out.push_str(&format!("\\subsection{{{}}}\n", label));
}

fn append_listing(out: &mut String, source: &str) {
    out.push_str(LISTING_BEGIN);
    out.push_str(source);
    out.push_str(LISTING_END);
}
