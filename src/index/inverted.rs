//! The in-memory inverted index over loaded lines.
//!
//! A [`LineIndex`] is the immutable product of indexing: it owns the
//! original lines in load order and, for each distinct normalized term,
//! the set of line ids containing that term. It is built once by
//! [`IndexBuilder`](crate::index::IndexBuilder) and only read afterwards;
//! queries borrow it and never mutate it.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// An immutable inverted index over an ordered sequence of lines.
///
/// Lines are identified by their 0-based position in the load order.
/// Posting sets hold line ids without ordering, duplicates, or term
/// frequencies.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    /// The loaded lines, in load order.
    lines: Vec<String>,

    /// term -> set of line ids containing the term
    postings: AHashMap<String, AHashSet<u32>>,
}

impl LineIndex {
    pub(crate) fn new(lines: Vec<String>, postings: AHashMap<String, AHashSet<u32>>) -> Self {
        LineIndex { lines, postings }
    }

    /// Resolve a line id to its text.
    pub fn line(&self, id: u32) -> Option<&str> {
        self.lines.get(id as usize).map(String::as_str)
    }

    /// All loaded lines, in load order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of loaded lines.
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Check whether the index holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over the distinct terms in the index.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Look up the posting set for a term.
    ///
    /// Absent terms return `None`; callers treat that as an empty set.
    pub fn postings(&self, term: &str) -> Option<&AHashSet<u32>> {
        self.postings.get(term)
    }

    /// The set of all valid line ids, `{0 .. line_count}`.
    pub fn universe(&self) -> AHashSet<u32> {
        (0..self.line_count()).collect()
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            line_count: self.line_count() as u64,
            term_count: self.term_count() as u64,
        }
    }
}

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of lines in the index.
    pub line_count: u64,

    /// Number of distinct terms in the index.
    pub term_count: u64,
}
