//! # kbner-core
//!
//! Core types for the kbner pipeline: shared data structures used across all crates.
//!
//! This crate provides:
//! - **Tokens and spans**: `TaggedSentence`, `TokenSpan`
//! - **Supervision**: `Label`, `EntityKind`, `KindSet`
//! - **Records**: one struct per stage output, each rendering a TSV line
//! - **Codec**: the `\N` / `{a,b}` / `|^|` conventions and the `Stage` trait
//!
//! All other crates in the kbner workspace depend on `kbner-core` so that
//! records and stages compose across the toolbox.

#![warn(missing_docs)]

pub mod entity;
pub mod error;
pub mod label;
pub mod record;
pub mod span;
pub mod stage;
pub mod tsv;

// Re-exports for convenience
pub use entity::{EntityKind, KindSet};
pub use label::Label;
pub use record::{
    ClosureRow, ContextRow, FeatureRow, LinkedCandidate, ListMembership, MentionCandidate,
    OrgCandidate, PairCandidate, SpanRecord, SupervisedMention,
};
pub use span::{SpanOrigin, TaggedSentence, TokenSpan};
pub use stage::Stage;
pub use tsv::{FeatureSet, TsvRecord, NULL, SUBRECORD_DELIM};

pub use error::{Error, Result};
