//! Gazetteer-driven location candidates, features and supervision.
//!
//! A span that names several cities yields one candidate per city. The
//! candidates share the span but differ in `location_id`, country and
//! whether they are the most populous reading.

use kbner_core::tsv::{columns_from, parse_field};
use kbner_core::{
    EntityKind, FeatureRow, FeatureSet, Label, LinkedCandidate, Stage, SupervisedMention,
    TaggedSentence, TokenSpan,
};

use super::{apply_downgrades, downgrade_rules};
use crate::kb::{Gazetteer, Location};
use crate::lexicon::Lexicons;
use crate::spanner::NounPhraseSpanner;

/// Features of one reading of an ambiguous city name.
///
/// `others` are the base spans of the sentence; the span starting at the
/// mention's own offset is skipped.
#[must_use]
pub fn location_features(
    candidates: &[Location],
    index: usize,
    sentence: &TaggedSentence<'_>,
    mention_start: usize,
    others: &[TokenSpan],
) -> FeatureSet {
    let mut features = FeatureSet::new();
    let Some(loc) = candidates.get(index) else {
        return features;
    };

    // positional comparison: two identical rows are still distinct readings
    let most_populous = candidates
        .iter()
        .enumerate()
        .all(|(i, other)| i == index || loc.population > other.population);
    if most_populous {
        features.insert("is_most_populous");
    }

    features.insert(format!("country_{}", loc.country_code));

    for near in others.iter().filter(|s| s.start != mention_start) {
        features.insert(format!("near_{}", sentence.phrase(near)));
    }
    features
}

/// Labels proper-noun spans that name a gazetteer city.
///
/// Spans with no gazetteer entry are dropped. Input: `sentence_id, words,
/// poses`.
#[derive(Debug, Clone, Copy)]
pub struct GazetteerLocationLabeler<'a> {
    gazetteer: &'a Gazetteer,
    lexicons: &'a Lexicons,
}

impl<'a> GazetteerLocationLabeler<'a> {
    /// Create a labeler over a loaded gazetteer.
    #[must_use]
    pub fn new(gazetteer: &'a Gazetteer, lexicons: &'a Lexicons) -> Self {
        Self {
            gazetteer,
            lexicons,
        }
    }

    /// Candidates for one sentence, in span order then gazetteer order.
    #[must_use]
    pub fn label_sentence(
        &self,
        sentence_id: &str,
        sentence: &TaggedSentence<'_>,
    ) -> Vec<LinkedCandidate> {
        let spans = NounPhraseSpanner::new(self.lexicons).base_spans(sentence);
        let mut out = Vec::new();
        for (mention_num, span) in spans.iter().enumerate() {
            let text = sentence.text(span);
            let matches = self.gazetteer.lookup(&text);
            if matches.is_empty() {
                continue;
            }

            let label = apply_downgrades(
                if matches.len() == 1 {
                    Label::Positive
                } else {
                    Label::Unknown
                },
                downgrade_rules(EntityKind::Location),
                sentence,
                span,
                self.lexicons,
            );

            for (i, loc) in matches.iter().enumerate() {
                out.push(LinkedCandidate {
                    mention_id: format!(
                        "{}_{}_{}_{}",
                        sentence_id, span.start, span.end, loc.id
                    ),
                    sentence_id: sentence_id.to_string(),
                    mention_num,
                    text: text.clone(),
                    start: span.start,
                    end: span.end,
                    location_id: loc.id,
                    label,
                    features: location_features(matches, i, sentence, span.start, &spans),
                });
            }
        }
        out
    }
}

impl Stage for GazetteerLocationLabeler<'_> {
    type Record = LinkedCandidate;

    fn name(&self) -> &'static str {
        "locations"
    }

    fn columns(&self) -> usize {
        3
    }

    fn process(&self, cols: &[&str], out: &mut Vec<LinkedCandidate>) -> kbner_core::Result<()> {
        let [sentence_id, words, poses] = columns_from(cols)?;
        let sentence = TaggedSentence::parse(words, poses)?;
        out.extend(self.label_sentence(sentence_id, &sentence));
        Ok(())
    }
}

/// Emits one feature row per (gazetteer reading, feature) of an already
/// extracted mention.
///
/// Input: `sentence_id, words, poses, mention_num, from, to`.
#[derive(Debug, Clone, Copy)]
pub struct LocationFeatureStage<'a> {
    gazetteer: &'a Gazetteer,
    lexicons: &'a Lexicons,
}

impl<'a> LocationFeatureStage<'a> {
    /// Create the stage over a loaded gazetteer.
    #[must_use]
    pub fn new(gazetteer: &'a Gazetteer, lexicons: &'a Lexicons) -> Self {
        Self {
            gazetteer,
            lexicons,
        }
    }
}

impl Stage for LocationFeatureStage<'_> {
    type Record = FeatureRow;

    fn name(&self) -> &'static str {
        "location-features"
    }

    fn columns(&self) -> usize {
        6
    }

    fn process(&self, cols: &[&str], out: &mut Vec<FeatureRow>) -> kbner_core::Result<()> {
        let [sentence_id, words, poses, mention_num, from, to] = columns_from(cols)?;
        let sentence = TaggedSentence::parse(words, poses)?;
        let start: usize = parse_field(from, "from")?;
        let end: usize = parse_field(to, "to")?;
        let mention = TokenSpan::run(start, end);

        let matches = self.gazetteer.lookup(&sentence.text(&mention));
        if matches.is_empty() {
            return Ok(());
        }
        let spans = NounPhraseSpanner::new(self.lexicons).base_spans(&sentence);
        for (i, loc) in matches.iter().enumerate() {
            let features = location_features(matches, i, &sentence, start, &spans);
            out.extend(features.iter().map(|feature| FeatureRow {
                sentence_id: sentence_id.to_string(),
                mention_num: mention_num.to_string(),
                location_id: loc.id,
                feature: feature.to_string(),
            }));
        }
        Ok(())
    }
}

/// Marks mentions whose name has exactly one gazetteer reading.
///
/// Input: `sentence_id, mention_num, text, from, to, value`; the incoming
/// value is replaced. Names with several readings, or none, emit nothing.
#[derive(Debug, Clone, Copy)]
pub struct GazetteerSupervisor<'a> {
    gazetteer: &'a Gazetteer,
}

impl<'a> GazetteerSupervisor<'a> {
    /// Create the supervisor over a loaded gazetteer.
    #[must_use]
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self { gazetteer }
    }
}

impl Stage for GazetteerSupervisor<'_> {
    type Record = SupervisedMention;

    fn name(&self) -> &'static str {
        "supervise-locations"
    }

    fn columns(&self) -> usize {
        6
    }

    fn process(&self, cols: &[&str], out: &mut Vec<SupervisedMention>) -> kbner_core::Result<()> {
        let [sentence_id, mention_num, text, from, to, _value] = columns_from(cols)?;
        if self.gazetteer.lookup(text).len() == 1 {
            out.push(SupervisedMention {
                sentence_id: sentence_id.to_string(),
                mention_num: mention_num.to_string(),
                text: text.to_string(),
                start: from.to_string(),
                end: to.to_string(),
                label: Label::Positive,
            });
        }
        Ok(())
    }
}
