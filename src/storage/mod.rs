//! # Storage Layer
//!
//! Filesystem access for a codebook project.
//!
//! ## Project Structure
//!
//! ```text
//! project/
//! ├── codebook.toml                     # Optional configuration
//! ├── 1-Elementary-Algorithms/
//! │   ├── 1.1.1_Sorting_Algorithms.cpp  # Chapter 1, section 1, subsection 1
//! │   └── 1.2_Notes.cpp                 # Chapter 1, section 2, no subsection
//! ├── 2-Data-Structures/
//! │   └── ...
//! └── Book/
//!     ├── chapter1.tex                  # Generated
//!     └── chapter2.tex                  # Generated
//! ```
//!
//! ## Key Types
//!
//! - [`Book`] - Entry point for discovering chapters and their entries
//! - [`ChapterGenerator`] - Writes `chapter<N>.tex` documents
//! - [`Config`] - Project configuration

mod book;
mod config;
mod generator;

pub use book::{Book, BookError};
pub use config::{Config, ConfigError, CONFIG_FILE, DEFAULT_BOOK_DIR};
pub use generator::{ChapterGenerator, ChapterReport};
