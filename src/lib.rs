//! codebook-gen - typesets a codebook from numbered source snippets
//!
//! A codebook project holds one directory per chapter (`1-Elementary-Algorithms`)
//! with snippets named by section (`1.2.1_Longest_Increasing_Subsequence.cpp`).
//! Generation writes one LaTeX file per chapter with section headers taken from
//! a fixed title table and every snippet embedded verbatim in a listing.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Chapter, Document, SectionEntry, SectionTitles};
pub use storage::{Book, ChapterGenerator, ChapterReport};
