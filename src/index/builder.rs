//! Index construction from an ordered sequence of lines.
//!
//! # Examples
//!
//! ```
//! use javelin::index::IndexBuilder;
//!
//! let lines = vec![
//!     "Alice Smith alice@x.com".to_string(),
//!     "Bob Jones bob@x.com".to_string(),
//! ];
//! let index = IndexBuilder::new().build(lines).unwrap();
//!
//! assert_eq!(index.line_count(), 2);
//! assert!(index.postings("alice").is_some());
//! ```

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::index::inverted::LineIndex;

/// Builds a [`LineIndex`] from an ordered sequence of lines.
///
/// Every line is run through the analyzer; each resulting term's posting
/// set receives the line's id. Building is total: any in-memory sequence,
/// including an empty one, produces an index.
pub struct IndexBuilder {
    analyzer: Analyzer,
}

impl IndexBuilder {
    /// Create a builder with the standard analyzer (space tokenization,
    /// lowercasing).
    pub fn new() -> Self {
        IndexBuilder {
            analyzer: Analyzer::standard(),
        }
    }

    /// Create a builder with a custom analyzer.
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        IndexBuilder { analyzer }
    }

    /// The analyzer used by this builder.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Build the inverted index, consuming the line sequence.
    pub fn build(&self, lines: Vec<String>) -> Result<LineIndex> {
        let mut postings: AHashMap<String, AHashSet<u32>> = AHashMap::new();

        for (id, line) in lines.iter().enumerate() {
            for token in self.analyzer.analyze(line)? {
                postings.entry(token.text).or_default().insert(id as u32);
            }
        }

        debug!(
            "indexed {} lines into {} distinct terms",
            lines.len(),
            postings.len()
        );

        Ok(LineIndex::new(lines, postings))
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        IndexBuilder::new()
    }
}
