//! Query execution over a built index.
//!
//! The engine borrows a [`LineIndex`] and computes match sets for the
//! three strategies. It expects terms already normalized by the same
//! analyzer that built the index; terms absent from the index contribute
//! empty posting sets, never an error.
//!
//! # Examples
//!
//! ```
//! use javelin::index::IndexBuilder;
//! use javelin::query::{MatchStrategy, QueryEngine};
//!
//! let lines = vec![
//!     "Alice Smith".to_string(),
//!     "Bob Jones".to_string(),
//! ];
//! let index = IndexBuilder::new().build(lines).unwrap();
//! let engine = QueryEngine::new(&index);
//!
//! let matches = engine.search(MatchStrategy::Any, &["alice".to_string()]);
//! assert!(matches.contains(&0));
//! assert!(!matches.contains(&1));
//! ```

use ahash::AHashSet;
use log::debug;

use crate::index::LineIndex;
use crate::query::strategy::MatchStrategy;

/// Executes boolean set queries against a [`LineIndex`].
pub struct QueryEngine<'a> {
    index: &'a LineIndex,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over the given index.
    pub fn new(index: &'a LineIndex) -> Self {
        QueryEngine { index }
    }

    /// Compute the set of line ids matching the given strategy and terms.
    ///
    /// The result is an unordered set; callers that display it sort the
    /// ids ascending.
    pub fn search(&self, strategy: MatchStrategy, terms: &[String]) -> AHashSet<u32> {
        let matches = match strategy {
            MatchStrategy::All => self.search_all(terms),
            MatchStrategy::Any => self.search_any(terms),
            MatchStrategy::None => self.search_none(terms),
        };

        debug!(
            "{} query over {} terms matched {} of {} lines",
            strategy,
            terms.len(),
            matches.len(),
            self.index.line_count()
        );

        matches
    }

    /// Union of the terms' posting sets.
    fn search_any(&self, terms: &[String]) -> AHashSet<u32> {
        let mut matches = AHashSet::new();

        for term in terms {
            if let Some(postings) = self.index.postings(term) {
                matches.extend(postings.iter().copied());
            }
        }

        matches
    }

    /// Intersection of the terms' posting sets, seeded with the universe
    /// so a zero-term query matches every line.
    fn search_all(&self, terms: &[String]) -> AHashSet<u32> {
        let mut matches = self.index.universe();

        for term in terms {
            match self.index.postings(term) {
                Some(postings) => matches.retain(|id| postings.contains(id)),
                None => matches.clear(),
            }
        }

        matches
    }

    /// Universe minus the union of the terms' posting sets.
    fn search_none(&self, terms: &[String]) -> AHashSet<u32> {
        let mut matches = self.index.universe();

        for term in terms {
            if let Some(postings) = self.index.postings(term) {
                for id in postings.iter() {
                    matches.remove(id);
                }
            }
        }

        matches
    }
}
