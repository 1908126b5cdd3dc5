//! Error types for the Javelin library.
//!
//! All errors are represented by the [`JavelinError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use javelin::error::{JavelinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JavelinError::query("unknown match strategy"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Javelin operations.
///
/// This enum represents all possible errors that can occur in the Javelin
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods.
#[derive(Error, Debug)]
pub enum JavelinError {
    /// I/O errors (reading the data file, interactive input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors (strategy parsing, invalid queries, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JavelinError.
pub type Result<T> = std::result::Result<T, JavelinError>;

impl JavelinError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JavelinError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        JavelinError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        JavelinError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JavelinError::Other(msg.into())
    }
}
