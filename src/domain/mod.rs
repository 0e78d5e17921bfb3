//! Domain models for codebook generation
//!
//! Naming conventions, ordering and document layout, without any I/O.

mod chapter;
mod entry;
mod titles;
mod document;

pub use chapter::Chapter;
pub use entry::{EntryError, SectionEntry};
pub use titles::SectionTitles;
pub use document::{Block, Document};
