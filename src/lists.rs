//! Coordinated lists of proper-noun spans.
//!
//! Finds the longest runs of the shapes
//!
//! ```text
//! [A], [B], [C], and [D]     two or more, closed by `and`
//! [A], [B], [C], or [D]      two or more, closed by `or`
//! [A], [B], [C]              three or more, comma only
//! ```
//!
//! Members of one list are likely to share an entity type, which downstream
//! inference uses as a soft constraint.

use kbner_core::tsv::columns_from;
use kbner_core::{ListMembership, Stage, TaggedSentence, TokenSpan};

use crate::lexicon::Lexicons;
use crate::spanner::NounPhraseSpanner;

/// Smallest comma-only list that is flushed when it is broken off.
pub const MIN_OPEN_LIST: usize = 3;

/// What the tokens between two consecutive spans mean for the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `,`: the list goes on.
    Continue,
    /// `and`, `or`, `, and`, `, or`: the next span is the last member.
    Close,
    /// Anything else ends the list before the next span, which does not
    /// open one of its own.
    Break,
}

impl Separator {
    /// Classify the space-joined tokens strictly between two spans.
    #[must_use]
    pub fn classify(between: &str) -> Self {
        match between {
            "," => Separator::Continue,
            ", and" | ", or" | "and" | "or" => Separator::Close,
            _ => Separator::Break,
        }
    }
}

/// Groups the spans of one sentence into lists, as ranges of span indices.
///
/// The list ranges are returned in order; unclosed trailing lists are
/// dropped.
#[must_use]
pub fn coordinate(sentence: &TaggedSentence<'_>, spans: &[TokenSpan]) -> Vec<std::ops::Range<usize>> {
    let mut lists = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, span) in spans.iter().enumerate() {
        let Some(first) = open else {
            open = Some(idx);
            continue;
        };
        let prev = spans[idx - 1];
        let between = sentence
            .words()
            .get(prev.end..span.start)
            .map(|w| w.join(" "))
            .unwrap_or_default();

        match Separator::classify(&between) {
            Separator::Continue => {}
            Separator::Close => {
                lists.push(first..idx + 1);
                open = None;
            }
            Separator::Break => {
                if idx - first >= MIN_OPEN_LIST {
                    lists.push(first..idx);
                }
                open = None;
            }
        }
    }
    lists
}

/// Emits list memberships for the base spans of each sentence.
///
/// Input: `document_id, sentence_id, words, poses`.
#[derive(Debug, Clone, Copy)]
pub struct ListCoordinator<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> ListCoordinator<'a> {
    /// Create a coordinator.
    #[must_use]
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self { lexicons }
    }

    /// Memberships for one sentence. List ids are `<doc>_<sentence>_<n>`.
    #[must_use]
    pub fn memberships(
        &self,
        document_id: &str,
        sentence_id: &str,
        sentence: &TaggedSentence<'_>,
    ) -> Vec<ListMembership> {
        let spans = NounPhraseSpanner::new(self.lexicons).base_spans(sentence);
        coordinate(sentence, &spans)
            .into_iter()
            .enumerate()
            .flat_map(|(n, members)| {
                let list_id = format!("{document_id}_{sentence_id}_{n}");
                members.map(move |mention_num| ListMembership {
                    document_id: document_id.to_string(),
                    sentence_id: sentence_id.to_string(),
                    mention_num,
                    list_id: list_id.clone(),
                })
            })
            .collect()
    }
}

impl Stage for ListCoordinator<'_> {
    type Record = ListMembership;

    fn name(&self) -> &'static str {
        "lists"
    }

    fn columns(&self) -> usize {
        4
    }

    fn process(&self, cols: &[&str], out: &mut Vec<ListMembership>) -> kbner_core::Result<()> {
        let [document_id, sentence_id, words, poses] = columns_from(cols)?;
        let sentence = TaggedSentence::parse(words, poses)?;
        out.extend(self.memberships(document_id, sentence_id, &sentence));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(words: &str, poses: &str) -> Vec<std::ops::Range<usize>> {
        let s = TaggedSentence::parse(words, poses).unwrap();
        let spans = NounPhraseSpanner::default().base_spans(&s);
        coordinate(&s, &spans)
    }

    #[test]
    fn four_members_closed_by_and() {
        assert_eq!(
            lists("Paris , London , Rome and Oslo", "NNP , NNP , NNP CC NNP"),
            vec![0..4]
        );
    }

    #[test]
    fn oxford_comma_or() {
        assert_eq!(
            lists("Paris , London , or Rome", "NNP , NNP , CC NNP"),
            vec![0..3]
        );
    }

    #[test]
    fn two_comma_members_at_sentence_end_are_dropped() {
        assert!(lists("Paris , London", "NNP , NNP").is_empty());
    }

    #[test]
    fn long_comma_list_flushes_on_break() {
        assert_eq!(
            lists(
                "Paris , London , Rome visited Oslo , Bergen and Lyon",
                "NNP , NNP , NNP VBD NNP , NNP CC NNP"
            ),
            vec![0..3, 4..6]
        );
    }

    #[test]
    fn span_after_a_break_opens_no_list() {
        assert!(lists(
            "Paris , London met Oslo and Bergen",
            "NNP , NNP VBD NNP CC NNP"
        )
        .is_empty());
        assert_eq!(
            lists(
                "Paris , London , Rome visited Oslo and Bergen",
                "NNP , NNP , NNP VBD NNP CC NNP"
            ),
            vec![0..3]
        );
    }

    #[test]
    fn separators() {
        assert_eq!(Separator::classify(","), Separator::Continue);
        assert_eq!(Separator::classify(", and"), Separator::Close);
        assert_eq!(Separator::classify("or"), Separator::Close);
        assert_eq!(Separator::classify("and the"), Separator::Break);
        assert_eq!(Separator::classify(""), Separator::Break);
    }

    #[test]
    fn stage_list_ids_are_per_sentence() {
        let coordinator = ListCoordinator::new(Lexicons::standard());
        let mut out = Vec::new();
        coordinator
            .process(&["d1", "s3", "Paris and London", "NNP CC NNP"], &mut out)
            .unwrap();
        let ids: Vec<(usize, &str)> = out
            .iter()
            .map(|m| (m.mention_num, m.list_id.as_str()))
            .collect();
        assert_eq!(ids, vec![(0, "d1_s3_0"), (1, "d1_s3_0")]);
    }
}
