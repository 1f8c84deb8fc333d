//! Error types for kbner-core.

use thiserror::Error;

/// Result type for kbner-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for kbner-core operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A record did not have the column count its stage expects.
    #[error("Malformed record: expected {expected} columns, found {found}")]
    MalformedRecord {
        /// Column count the stage expects.
        expected: usize,
        /// Column count actually present.
        found: usize,
    },

    /// A record failed inside a stage; wraps the underlying error with its line.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based input line number.
        line: usize,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a malformed record error.
    #[must_use]
    pub fn malformed(expected: usize, found: usize) -> Self {
        Self::MalformedRecord { expected, found }
    }

    /// Attach an input line number.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
