//! Proper-noun phrase detection over POS-tagged tokens.
//!
//! A span is a maximal run of tokens whose tag starts with `NNP` (so `NNPS`
//! counts). Runs never bridge a gap. Optionally, two runs separated by a
//! single bare `and` are also emitted merged, as in "Smith and Wesson",
//! unless the left run holds a word that makes the merge implausible
//! (a month, a title, a generic institution, a company suffix).

use kbner_core::tsv::columns_from;
use kbner_core::{SpanRecord, Stage, TaggedSentence, TokenSpan};

use crate::lexicon::Lexicons;

/// Tag prefix marking proper nouns in the Penn Treebank tag set.
pub const PROPER_NOUN_PREFIX: &str = "NNP";

/// Detects proper-noun spans. Holds only a reference to the lexicons.
#[derive(Debug, Clone, Copy)]
pub struct NounPhraseSpanner<'l> {
    lexicons: &'l Lexicons,
}

impl Default for NounPhraseSpanner<'static> {
    fn default() -> Self {
        Self::new(Lexicons::standard())
    }
}

impl<'l> NounPhraseSpanner<'l> {
    /// Create a spanner using the given lexicons for the and-join exclusions.
    #[must_use]
    pub fn new(lexicons: &'l Lexicons) -> Self {
        Self { lexicons }
    }

    /// Maximal proper-noun runs, left to right, non-overlapping.
    #[must_use]
    pub fn base_spans(&self, sentence: &TaggedSentence<'_>) -> Vec<TokenSpan> {
        let poses = sentence.poses();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < poses.len() {
            let mut j = i;
            while j < poses.len() && poses[j].starts_with(PROPER_NOUN_PREFIX) {
                j += 1;
            }
            if j > i {
                spans.push(TokenSpan::run(i, j));
            }
            // poses[j] is not a proper noun (or j is past the end)
            i = j + 1;
        }
        spans
    }

    /// Runs merged across a bare `and`, for each adjacent pair of `base`.
    #[must_use]
    pub fn and_joined_spans(
        &self,
        sentence: &TaggedSentence<'_>,
        base: &[TokenSpan],
    ) -> Vec<TokenSpan> {
        base.windows(2)
            .filter_map(|pair| {
                let (left, right) = (pair[0], pair[1]);
                if left.end + 1 != right.start || sentence.word(left.end) != Some("and") {
                    return None;
                }
                let blocked = sentence
                    .slice(&left)
                    .iter()
                    .any(|w| self.lexicons.blocks_and_join(w));
                (!blocked).then(|| TokenSpan::and_joined(left.start, right.end))
            })
            .collect()
    }

    /// Base spans followed by their and-joined merges.
    #[must_use]
    pub fn spans_with_and_joins(&self, sentence: &TaggedSentence<'_>) -> Vec<TokenSpan> {
        let mut spans = self.base_spans(sentence);
        let joined = self.and_joined_spans(sentence, &spans);
        spans.extend(joined);
        spans
    }
}

/// The `spans` stage: every base and and-joined span of a sentence.
///
/// Input: `sentence_id, words, poses`.
#[derive(Debug, Clone, Copy)]
pub struct SpanStage<'l> {
    spanner: NounPhraseSpanner<'l>,
}

impl<'l> SpanStage<'l> {
    /// Wrap a spanner.
    #[must_use]
    pub fn new(spanner: NounPhraseSpanner<'l>) -> Self {
        Self { spanner }
    }
}

impl Stage for SpanStage<'_> {
    type Record = SpanRecord;

    fn name(&self) -> &'static str {
        "spans"
    }

    fn columns(&self) -> usize {
        3
    }

    fn process(&self, cols: &[&str], out: &mut Vec<SpanRecord>) -> kbner_core::Result<()> {
        let [sentence_id, words, poses] = columns_from(cols)?;
        let sentence = TaggedSentence::parse(words, poses)?;
        let spans = self.spanner.spans_with_and_joins(&sentence);
        out.extend(spans.iter().enumerate().map(|(mention_num, span)| SpanRecord {
            sentence_id: sentence_id.to_string(),
            mention_num,
            start: span.start,
            end: span.end,
            origin: span.origin,
            text: sentence.text(span),
        }));
        Ok(())
    }
}
