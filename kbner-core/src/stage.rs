//! The line-oriented stage abstraction.

use serde::Serialize;

use crate::tsv::TsvRecord;
use crate::Result;

/// A stateless transformation from one TSV input record to zero or more
/// output records.
///
/// Implementations hold only immutable, preloaded state (lexicons, indices),
/// so one stage value can serve any number of records, and `Sync` stages may
/// be shared across threads.
pub trait Stage {
    /// Output record type.
    type Record: TsvRecord + Serialize;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Number of tab-separated input columns.
    fn columns(&self) -> usize;

    /// Process one record already split into [`Stage::columns`] columns.
    fn process(&self, cols: &[&str], out: &mut Vec<Self::Record>) -> Result<()>;
}
