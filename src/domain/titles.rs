//! Section title table
//!
//! Section headers are looked up by `(chapter, section)`. The table is fixed at
//! build time; sections without an entry get an empty header.

use std::collections::BTreeMap;

const BUILTIN_TITLES: &[((u32, u32), &str)] = &[
    ((1, 1), "Array Transformations"),
    ((1, 2), "Array Queries"),
    ((1, 3), "Searching"),
    ((1, 4), "Cycle Detection"),
    ((2, 1), "Heaps"),
    ((2, 2), "Dictionaries"),
    ((2, 3), "Range Queries in One Dimension"),
    ((2, 4), "Range Queries in Two Dimensions"),
    ((2, 5), "Fenwick Trees"),
    ((2, 6), "Tree Data Structures"),
    ((3, 1), "String Utilities"),
    ((3, 2), "Expression Parsing"),
    ((3, 3), "String Searching"),
    ((3, 4), "Dynamic Programming"),
    ((3, 5), "Suffix Array and LCP"),
    ((3, 6), "String Data Structures"),
    ((4, 1), "Depth-First Search"),
    ((4, 2), "Shortest Path"),
    ((4, 3), "Connectivity"),
    ((4, 4), "Minimum Spanning Tree"),
    ((4, 5), "Maximum Flow"),
    ((4, 6), "Maximum Matching"),
    ((4, 7), "Hard Problems"),
    ((5, 1), "Math Utilities"),
    ((5, 2), "Combinatorics"),
    ((5, 3), "Number Theory"),
    ((5, 4), "Arbitrary Precision Arithmetic"),
    ((5, 5), "Linear Algebra"),
    ((5, 6), "Root Finding and Calculus"),
    ((6, 1), "Geometric Classes"),
    ((6, 2), "Elementary Geometric Calculations"),
    ((6, 3), "Intermediate Geometric Calculations"),
    ((6, 4), "Advanced Geometric Computations"),
];

/// Immutable mapping from `(chapter, section)` to a section title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitles {
    titles: BTreeMap<(u32, u32), String>,
}

impl SectionTitles {
    /// The codebook's own table
    pub fn builtin() -> Self {
        BUILTIN_TITLES.iter().copied().collect()
    }

    /// Returns the title for a section, or `""` when the table has none
    pub fn title(&self, chapter: u32, section: u32) -> &str {
        self.titles
            .get(&(chapter, section))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of titled sections
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if no section has a title
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: Into<String>> FromIterator<((u32, u32), S)> for SectionTitles {
    fn from_iter<I: IntoIterator<Item = ((u32, u32), S)>>(iter: I) -> Self {
        Self {
            titles: iter
                .into_iter()
                .map(|(key, title)| (key, title.into()))
                .collect(),
        }
    }
}
