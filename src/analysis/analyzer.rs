//! Analyzer combining a tokenizer with a chain of token filters.
//!
//! # Examples
//!
//! ```
//! use javelin::analysis::analyzer::Analyzer;
//!
//! let analyzer = Analyzer::standard();
//! let terms = analyzer.analyze_terms("Alice Smith alice@x.com").unwrap();
//!
//! assert_eq!(terms, vec!["alice", "smith", "alice@x.com"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter};
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::error::Result;

/// An analyzer that runs text through a tokenizer and a filter chain.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl Analyzer {
    /// Create a new analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Analyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The standard pipeline: literal space tokenization, then lowercasing.
    pub fn standard() -> Self {
        Analyzer::new(Arc::new(SpaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard")
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this analyzer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Analyze text into a token stream.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Analyze text and return just the normalized term texts.
    pub fn analyze_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::standard()
    }
}
