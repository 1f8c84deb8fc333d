//! Knowledge-base joined labeler for any tracked kind.

use kbner_core::tsv::columns_from;
use kbner_core::{
    EntityKind, FeatureSet, Label, MentionCandidate, Stage, TaggedSentence, TokenSpan,
};

use super::{apply_downgrades, downgrade_rules};
use crate::kb::KnowledgeBaseIndex;
use crate::lexicon::Lexicons;
use crate::spanner::NounPhraseSpanner;

/// Labels every proper-noun span against the type-filtered knowledge base.
///
/// Unlike the gazetteer labeler, spans missing from the knowledge base are
/// kept with an `Unknown` label and no features.
///
/// Input: `document_id, sentence_id, words, poses`.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBaseLabeler<'a> {
    kb: &'a KnowledgeBaseIndex,
    lexicons: &'a Lexicons,
    target: EntityKind,
}

impl<'a> KnowledgeBaseLabeler<'a> {
    /// Create a labeler supervising for `target`.
    #[must_use]
    pub fn new(kb: &'a KnowledgeBaseIndex, lexicons: &'a Lexicons, target: EntityKind) -> Self {
        Self {
            kb,
            lexicons,
            target,
        }
    }

    /// The kind this labeler supervises for.
    #[must_use]
    pub fn target(&self) -> EntityKind {
        self.target
    }

    /// Label one span.
    #[must_use]
    pub fn label_span(&self, sentence: &TaggedSentence<'_>, span: &TokenSpan) -> Label {
        let name = sentence.text(span);
        let label = match self.kb.exclusive_kind(&name) {
            Some(kind) => Label::from_bool(kind == self.target),
            None => Label::Unknown,
        };
        apply_downgrades(
            label,
            downgrade_rules(self.target),
            sentence,
            span,
            self.lexicons,
        )
    }

    /// `kb_<kind>` for every tracked kind carrying the name.
    #[must_use]
    pub fn features(&self, name: &str) -> FeatureSet {
        self.kb
            .kinds_named(name)
            .iter()
            .map(|kind| format!("kb_{kind}"))
            .collect()
    }

    /// All candidates of one sentence.
    #[must_use]
    pub fn label_sentence(
        &self,
        document_id: &str,
        sentence_id: &str,
        sentence: &TaggedSentence<'_>,
    ) -> Vec<MentionCandidate> {
        let spanner = NounPhraseSpanner::new(self.lexicons);
        spanner
            .base_spans(sentence)
            .iter()
            .enumerate()
            .map(|(mention_num, span)| {
                let text = sentence.text(span);
                MentionCandidate {
                    mention_id: format!("{}_{}_{}", sentence_id, span.start, span.end),
                    document_id: document_id.to_string(),
                    sentence_id: sentence_id.to_string(),
                    mention_num,
                    label: self.label_span(sentence, span),
                    features: self.features(&text),
                    text,
                    start: span.start,
                    end: span.end,
                }
            })
            .collect()
    }
}

impl Stage for KnowledgeBaseLabeler<'_> {
    type Record = MentionCandidate;

    fn name(&self) -> &'static str {
        "entities"
    }

    fn columns(&self) -> usize {
        4
    }

    fn process(&self, cols: &[&str], out: &mut Vec<MentionCandidate>) -> kbner_core::Result<()> {
        let [document_id, sentence_id, words, poses] = columns_from(cols)?;
        let sentence = TaggedSentence::parse(words, poses)?;
        out.extend(self.label_sentence(document_id, sentence_id, &sentence));
        Ok(())
    }
}
