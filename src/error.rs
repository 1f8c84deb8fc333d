//! Error types for kbner.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for kbner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for kbner operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required input file does not exist.
    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    /// A knowledge-base or gazetteer file has a bad row.
    #[error("Knowledge base error in {}:{line}: {message}", path.display())]
    KnowledgeBase {
        /// File being loaded.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// A stage record failed.
    #[error(transparent)]
    Record(#[from] kbner_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a missing-file error.
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Error::MissingFile(path.into())
    }

    /// Create a knowledge-base row error.
    pub fn knowledge_base(path: impl Into<PathBuf>, line: usize, msg: impl Into<String>) -> Self {
        Error::KnowledgeBase {
            path: path.into(),
            line,
            message: msg.into(),
        }
    }
}
