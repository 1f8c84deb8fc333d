//! Output records emitted by the pipeline stages.
//!
//! Column order of every `to_tsv` is positional and consumed by downstream
//! loaders; do not reorder.

use serde::Serialize;

use crate::label::Label;
use crate::span::SpanOrigin;
use crate::tsv::{FeatureSet, TsvRecord, NULL};

/// A proper-noun span as detected, before any labeling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanRecord {
    /// Sentence identifier.
    pub sentence_id: String,
    /// Position of the span in the spanner output.
    pub mention_num: usize,
    /// First token.
    pub start: usize,
    /// One past the last token.
    pub end: usize,
    /// Run or and-joined.
    pub origin: SpanOrigin,
    /// Surface string.
    pub text: String,
}

impl TsvRecord for SpanRecord {
    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.sentence_id,
            self.mention_num,
            self.start,
            self.end,
            self.origin.as_str(),
            self.text
        )
    }
}

/// Knowledge-base supervised mention candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentionCandidate {
    /// `<sentence>_<start>_<end>`.
    pub mention_id: String,
    /// Document identifier.
    pub document_id: String,
    /// Sentence identifier.
    pub sentence_id: String,
    /// Position of the span in the spanner output.
    pub mention_num: usize,
    /// Surface string.
    pub text: String,
    /// First token.
    pub start: usize,
    /// One past the last token.
    pub end: usize,
    /// Supervision label.
    pub label: Label,
    /// Feature tags.
    pub features: FeatureSet,
}

impl TsvRecord for MentionCandidate {
    fn to_tsv(&self) -> String {
        format!(
            "{NULL}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.mention_id,
            self.document_id,
            self.sentence_id,
            self.mention_num,
            self.text,
            self.start,
            self.end,
            self.label,
            self.features
        )
    }
}

/// Mention candidate linked to one gazetteer entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedCandidate {
    /// `<sentence>_<start>_<end>_<location_id>`.
    pub mention_id: String,
    /// Sentence identifier.
    pub sentence_id: String,
    /// Position of the span in the spanner output.
    pub mention_num: usize,
    /// Surface string.
    pub text: String,
    /// First token.
    pub start: usize,
    /// One past the last token.
    pub end: usize,
    /// Gazetteer row id.
    pub location_id: u64,
    /// Supervision label.
    pub label: Label,
    /// Feature tags.
    pub features: FeatureSet,
}

impl TsvRecord for LinkedCandidate {
    fn to_tsv(&self) -> String {
        format!(
            "{NULL}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.mention_id,
            self.sentence_id,
            self.mention_num,
            self.text,
            self.start,
            self.end,
            self.location_id,
            self.label,
            self.features
        )
    }
}

/// One feature of one (mention, gazetteer entry) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    /// Sentence identifier.
    pub sentence_id: String,
    /// Mention number as given on input.
    pub mention_num: String,
    /// Gazetteer row id.
    pub location_id: u64,
    /// Feature tag.
    pub feature: String,
}

impl TsvRecord for FeatureRow {
    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.sentence_id, self.mention_num, self.location_id, self.feature
        )
    }
}

/// An existing mention row re-emitted with a supervision value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupervisedMention {
    /// Sentence identifier.
    pub sentence_id: String,
    /// Mention number as given on input.
    pub mention_num: String,
    /// Surface string.
    pub text: String,
    /// First token, as given on input.
    pub start: String,
    /// End token, as given on input.
    pub end: String,
    /// Supervision label.
    pub label: Label,
}

impl TsvRecord for SupervisedMention {
    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.sentence_id, self.mention_num, self.text, self.start, self.end, self.label
        )
    }
}

/// Organization mention candidate, from body sentences or the title line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgCandidate {
    /// `<document>_<sentence_num>_<start>_<end>`.
    pub mention_id: String,
    /// Document identifier.
    pub document_id: String,
    /// Sentence number within the document; `-1` for the title line.
    pub sentence_num: i64,
    /// Position of the mention within its sentence.
    pub mention_num: usize,
    /// Company name with any ticker bracket removed.
    pub name: String,
    /// First token.
    pub start: usize,
    /// One past the last token.
    pub end: usize,
    /// Supervision label.
    pub label: Label,
    /// Ticker symbol, when one was bracketed.
    pub ticker: Option<String>,
    /// Feature tags.
    pub features: FeatureSet,
}

impl TsvRecord for OrgCandidate {
    fn to_tsv(&self) -> String {
        format!(
            "{NULL}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.mention_id,
            self.document_id,
            self.sentence_num,
            self.mention_num,
            self.name,
            self.start,
            self.end,
            self.label,
            self.ticker.as_deref().unwrap_or(""),
            self.features
        )
    }
}

/// Membership of one mention in a coordinated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMembership {
    /// Document identifier.
    pub document_id: String,
    /// Sentence identifier.
    pub sentence_id: String,
    /// Mention index within the sentence.
    pub mention_num: usize,
    /// Synthetic list identifier.
    pub list_id: String,
}

impl TsvRecord for ListMembership {
    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.document_id, self.sentence_id, self.mention_num, self.list_id
        )
    }
}

/// Compatibility record between two mentions of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCandidate {
    /// The later mention.
    pub mention_id: String,
    /// The earlier (or same) mention it may corefer with.
    pub proto_mention_id: String,
    /// Supervision label; unknown unless a supervisor sets it.
    pub label: Label,
    /// Feature tags.
    pub features: FeatureSet,
}

impl TsvRecord for PairCandidate {
    fn to_tsv(&self) -> String {
        format!(
            "{NULL}\t{}\t{}\t{}\t{}",
            self.mention_id, self.proto_mention_id, self.label, self.features
        )
    }
}

/// Context features of one mention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextRow {
    /// Sentence identifier.
    pub sentence_id: String,
    /// Mention number as given on input.
    pub mention_num: String,
    /// Feature tags.
    pub features: FeatureSet,
}

impl TsvRecord for ContextRow {
    fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.sentence_id, self.mention_num, self.features)
    }
}

/// One `(entity, seed type)` pair of the type closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClosureRow {
    /// Entity id.
    pub entity_id: u64,
    /// Seed type code the entity reaches.
    pub type_code: u64,
}

impl TsvRecord for ClosureRow {
    fn to_tsv(&self) -> String {
        format!("{}\t{}", self.entity_id, self.type_code)
    }
}
