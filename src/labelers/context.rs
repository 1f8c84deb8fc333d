//! Surrounding-word features for an extracted mention.

use kbner_core::tsv::{columns_from, parse_field};
use kbner_core::{ContextRow, FeatureSet, Stage, TaggedSentence};

use crate::lexicon::Lexicons;
use crate::spanner::NounPhraseSpanner;

/// Largest before/after window, in tokens.
pub const MAX_WINDOW: usize = 3;

fn join_window(words: &[&str]) -> String {
    words.join("_").replace('\'', "")
}

/// `NEAR_`, `BEFORE_` and `AFTER_` features for mentions.
///
/// Input: `sentence_id, mention_num, from, to, words, poses`.
#[derive(Debug, Clone, Copy)]
pub struct ContextFeaturizer<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> ContextFeaturizer<'a> {
    /// Create a featurizer; lexicons only parameterize span detection.
    #[must_use]
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self { lexicons }
    }

    /// Features for the mention `[start, end)`.
    ///
    /// Windows that would run off either sentence edge are skipped.
    #[must_use]
    pub fn features(&self, sentence: &TaggedSentence<'_>, start: usize, end: usize) -> FeatureSet {
        let mut features = FeatureSet::new();
        let words = sentence.words();

        for near in NounPhraseSpanner::new(self.lexicons).base_spans(sentence) {
            if near.start != start {
                features.insert(format!("NEAR_{}", join_window(sentence.slice(&near))));
            }
        }

        for width in 1..=MAX_WINDOW {
            if let Some(from) = start.checked_sub(width) {
                if let Some(before) = words.get(from..start) {
                    features.insert(format!("BEFORE_{}", join_window(before)));
                }
            }
            if let Some(after) = end.checked_add(width).and_then(|to| words.get(end..to)) {
                features.insert(format!("AFTER_{}", join_window(after)));
            }
        }
        features
    }
}

impl Stage for ContextFeaturizer<'_> {
    type Record = ContextRow;

    fn name(&self) -> &'static str {
        "context"
    }

    fn columns(&self) -> usize {
        6
    }

    fn process(&self, cols: &[&str], out: &mut Vec<ContextRow>) -> kbner_core::Result<()> {
        let [sentence_id, mention_num, from, to, words, poses] = columns_from(cols)?;
        let start: usize = parse_field(from, "from")?;
        let end: usize = parse_field(to, "to")?;
        let sentence = TaggedSentence::parse(words, poses)?;
        out.push(ContextRow {
            sentence_id: sentence_id.to_string(),
            mention_num: mention_num.to_string(),
            features: self.features(&sentence, start, end),
        });
        Ok(())
    }
}
