//! Token spans and POS-tagged sentences.

use serde::Serialize;

use crate::tsv::tokens;
use crate::{Error, Result};

/// How a span was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanOrigin {
    /// A maximal run of proper-noun tokens.
    Run,
    /// Two runs merged across a bare `and`.
    AndJoined,
}

impl SpanOrigin {
    /// Column value used in TSV output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpanOrigin::Run => "run",
            SpanOrigin::AndJoined => "and_joined",
        }
    }
}

/// Half-open token interval `[start, end)` within one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenSpan {
    /// First token index (inclusive).
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
    /// Producer of the span.
    pub origin: SpanOrigin,
}

impl TokenSpan {
    /// A span from a single proper-noun run.
    #[must_use]
    pub const fn run(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            origin: SpanOrigin::Run,
        }
    }

    /// A span merged across `and`.
    #[must_use]
    pub const fn and_joined(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            origin: SpanOrigin::AndJoined,
        }
    }

    /// Number of tokens covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for well-formed spans.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// `[start, end]` pair, handy in assertions.
    #[must_use]
    pub const fn bounds(&self) -> [usize; 2] {
        [self.start, self.end]
    }
}

/// One POS-tagged sentence, borrowed from its input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSentence<'a> {
    words: Vec<&'a str>,
    poses: Vec<&'a str>,
}

impl<'a> TaggedSentence<'a> {
    /// Build from parallel token sequences; the lengths must match.
    pub fn new(words: Vec<&'a str>, poses: Vec<&'a str>) -> Result<Self> {
        if words.len() != poses.len() {
            return Err(Error::invalid_input(format!(
                "{} words but {} POS tags",
                words.len(),
                poses.len()
            )));
        }
        Ok(Self { words, poses })
    }

    /// Parse space-joined word and POS columns.
    pub fn parse(words: &'a str, poses: &'a str) -> Result<Self> {
        Self::new(tokens(words), tokens(poses))
    }

    /// Words in order.
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// POS tags in order.
    #[must_use]
    pub fn poses(&self) -> &[&'a str] {
        &self.poses
    }

    /// Token count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if any.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&'a str> {
        self.words.get(index).copied()
    }

    /// Words covered by `span`; empty when the span falls outside the sentence.
    #[must_use]
    pub fn slice(&self, span: &TokenSpan) -> &[&'a str] {
        self.words.get(span.start..span.end).unwrap_or(&[])
    }

    /// Surface string: span words joined by spaces.
    #[must_use]
    pub fn text(&self, span: &TokenSpan) -> String {
        self.slice(span).join(" ")
    }

    /// Feature-friendly phrase: span words joined by underscores.
    #[must_use]
    pub fn phrase(&self, span: &TokenSpan) -> String {
        self.slice(span).join("_")
    }
}
