//! # kbner
//!
//! Distant-supervision candidate extraction for named entities in news text.
//!
//! Takes POS-tagged sentences, finds proper-noun spans, and joins them
//! against a Wikidata-derived knowledge base, a city gazetteer and small
//! heuristic word lists to emit labeled training candidates for a downstream
//! probabilistic inference system.
//!
//! ## Stages
//!
//! Every stage reads one TSV record at a time and writes zero or more TSV
//! records (see [`Stage`]):
//!
//! | Stage | Type | Emits |
//! |-------|------|-------|
//! | `spans` | [`SpanStage`] | proper-noun spans |
//! | `entities` | [`KnowledgeBaseLabeler`] | KB-labeled candidates for one target kind |
//! | `locations` | [`GazetteerLocationLabeler`] | city candidates, one per reading |
//! | `location-features` | [`LocationFeatureStage`] | per-reading feature rows |
//! | `supervise-locations` | [`GazetteerSupervisor`] | unambiguous city mentions |
//! | `orgs` | [`OrganizationLabeler`] | company candidates incl. headline tickers |
//! | `lists` | [`ListCoordinator`] | coordinated list memberships |
//! | `orglinks` | [`CrossReferenceLinker`] | within-document mention pairs |
//! | `context` | [`ContextFeaturizer`] | surrounding-word features |
//!
//! The offline `closure` step ([`TypeClosure`]) derives the type relation the
//! knowledge base is built from.
//!
//! ## Example
//!
//! ```rust
//! use kbner::{run_stage, GazetteerLocationLabeler, Lexicons, OutputFormat};
//! use kbner::kb::{Gazetteer, Location};
//!
//! let gazetteer = Gazetteer::from_locations([Location {
//!     id: 7,
//!     source_id: 2988507,
//!     name: "Paris".into(),
//!     lat: 48.85,
//!     lon: 2.35,
//!     country_code: "FR".into(),
//!     population: 2_138_551,
//! }]);
//! let stage = GazetteerLocationLabeler::new(&gazetteer, Lexicons::standard());
//!
//! let mut out = Vec::new();
//! run_stage(&stage, "s1\tflights to Paris\tNNS TO NNP\n".as_bytes(), &mut out, OutputFormat::Tsv)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\\N\ts1_2_3_7\ts1\t0\tParis\t2\t3\t7\t1\t{is_most_populous,country_FR}\n"
//! );
//! # Ok::<(), kbner::Error>(())
//! ```
//!
//! ## Labels
//!
//! Labels are `1` (positive), `0` (negative) or `\N` (unknown). Knowledge
//! sets a label first; heuristics may only downgrade it afterwards. See
//! [`labelers`] for the exact cascade.

#![warn(missing_docs)]

pub mod config;
mod error;
pub mod kb;
pub mod labelers;
pub mod lexicon;
pub mod lists;
pub mod spanner;
pub mod stream;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use kb::{Gazetteer, KnowledgeBaseIndex, TypeClosure};
pub use labelers::{
    ContextFeaturizer, GazetteerLocationLabeler, GazetteerSupervisor, KnowledgeBaseLabeler,
    LocationFeatureStage, OrganizationLabeler, TitleScanner,
};
pub use lexicon::Lexicons;
pub use lists::ListCoordinator;
pub use spanner::{NounPhraseSpanner, SpanStage};
pub use stream::{run_stage, OutputFormat, RunStats};

pub use kbner_coalesce::CrossReferenceLinker;
pub use kbner_core::{EntityKind, Label, Stage, TaggedSentence, TokenSpan};
