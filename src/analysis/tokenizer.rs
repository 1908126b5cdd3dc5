//! Tokenizer implementations for text analysis.

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on single space characters.
///
/// Splitting is literal: every `' '` is a separator and nothing else is.
/// Adjacent separators therefore produce empty tokens, tabs and other
/// whitespace stay inside their token, and punctuation stays attached
/// ("alice@x.com" is one token). Empty tokens are kept and indexed.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (position, word) in text.split(' ').enumerate() {
            let end = start + word.len();
            tokens.push(Token::with_offsets(word, position, start, end));
            start = end + 1;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
