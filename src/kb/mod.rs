//! Preloaded knowledge: the knowledge-base name index, the city gazetteer and
//! the offline type-closure job that feeds the former.
//!
//! Indices are built once at startup and never mutated afterwards; every
//! record-processing path only reads them, so they are `Send + Sync` and can
//! be shared freely.

pub mod closure;
pub mod gazetteer;
pub mod index;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::{Error, Result};

pub use closure::{Assigner, Relation, SubclassGraph, TypeClosure, DEFAULT_SEEDS, INSTANCE_OF, SUBCLASS_OF};
pub use gazetteer::{Gazetteer, GazetteerLayout, Location};
pub use index::{KnowledgeBaseBuilder, KnowledgeBaseIndex, NameEntry, NameKind};

/// Open a relation file for line-by-line reading.
///
/// A missing file is reported as [`Error::MissingFile`] so the caller can fail
/// before any record is processed.
pub(crate) fn read_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    if !path.exists() {
        return Err(Error::missing_file(path));
    }
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines())
}
