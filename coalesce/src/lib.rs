//! # kbner-coalesce
//!
//! Within-document cross-reference candidates.
//!
//! Companies are named in full once ("International Business Machines
//! Corp") and then shortened ("IBM", "IBM Corp"). This crate pairs every
//! mention of a document with every earlier mention (and itself) so a later
//! inference step can decide which short forms refer back to which full
//! names. Pairs carry cheap string-compatibility features; labels are left
//! unknown.
//!
//! # Example
//!
//! ```
//! use kbner_coalesce::{CrossReferenceLinker, Mention};
//!
//! let linker = CrossReferenceLinker::new();
//! let mentions = [
//!     Mention::new("d_0_0_1", "IBM"),
//!     Mention::new("d_1_0_2", "IBM Corp"),
//! ];
//! let pairs = linker.link(&mentions);
//! // (0,0), (1,0), (1,1)
//! assert_eq!(pairs.len(), 3);
//! assert!(pairs[1].features.contains("IS_PREFIX"));
//! ```

#![warn(missing_docs)]

pub mod linker;

pub use linker::{is_prefix, CrossReferenceLinker, Mention, DEFAULT_WARN_ABOVE};
