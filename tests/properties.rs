//! Property-based tests for span and list invariants.
//!
//! These tests verify that certain properties hold for ALL tagged sentences,
//! not just specific examples.

use kbner::lists::coordinate;
use kbner::{Lexicons, ListCoordinator, NounPhraseSpanner, TaggedSentence};
use proptest::prelude::*;

/// (word, tag) pairs drawn from a small vocabulary so runs, `and`s and commas
/// all show up often.
fn tagged_tokens() -> impl Strategy<Value = Vec<(String, String)>> {
    let token = prop_oneof![
        Just(("Paris".to_string(), "NNP".to_string())),
        Just(("States".to_string(), "NNPS".to_string())),
        Just(("March".to_string(), "NNP".to_string())),
        Just(("Inc.".to_string(), "NNP".to_string())),
        Just(("and".to_string(), "CC".to_string())),
        Just(("or".to_string(), "CC".to_string())),
        Just((",".to_string(), ",".to_string())),
        Just(("the".to_string(), "DT".to_string())),
        Just(("said".to_string(), "VBD".to_string())),
    ];
    prop::collection::vec(token, 1..24)
}

fn columns(tokens: &[(String, String)]) -> (String, String) {
    let words: Vec<&str> = tokens.iter().map(|(w, _)| w.as_str()).collect();
    let poses: Vec<&str> = tokens.iter().map(|(_, p)| p.as_str()).collect();
    (words.join(" "), poses.join(" "))
}

proptest! {
    #[test]
    fn base_spans_are_maximal_ordered_runs(tokens in tagged_tokens()) {
        let (words, poses) = columns(&tokens);
        let sentence = TaggedSentence::parse(&words, &poses).unwrap();
        let spans = NounPhraseSpanner::default().base_spans(&sentence);
        let is_nnp = |i: usize| sentence.poses()[i].starts_with("NNP");

        for pair in spans.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
        for span in &spans {
            prop_assert!(!span.is_empty());
            prop_assert!((span.start..span.end).all(is_nnp));
            prop_assert!(span.start == 0 || !is_nnp(span.start - 1));
            prop_assert!(span.end == sentence.len() || !is_nnp(span.end));
        }
        // every proper-noun token is covered
        for i in (0..sentence.len()).filter(|&i| is_nnp(i)) {
            prop_assert!(spans.iter().any(|s| s.start <= i && i < s.end));
        }
    }

    #[test]
    fn and_joins_cover_exactly_two_runs(tokens in tagged_tokens()) {
        let (words, poses) = columns(&tokens);
        let sentence = TaggedSentence::parse(&words, &poses).unwrap();
        let spanner = NounPhraseSpanner::default();
        let base = spanner.base_spans(&sentence);
        for joined in spanner.and_joined_spans(&sentence, &base) {
            let left = base.iter().find(|s| s.start == joined.start).unwrap();
            let right = base.iter().find(|s| s.end == joined.end).unwrap();
            prop_assert_eq!(left.end + 1, right.start);
            prop_assert_eq!(sentence.word(left.end), Some("and"));
        }
    }

    #[test]
    fn lists_are_disjoint_and_in_order(tokens in tagged_tokens()) {
        let (words, poses) = columns(&tokens);
        let sentence = TaggedSentence::parse(&words, &poses).unwrap();
        let spans = NounPhraseSpanner::default().base_spans(&sentence);
        let lists = coordinate(&sentence, &spans);
        for list in &lists {
            prop_assert!(list.len() >= 2);
            prop_assert!(list.end <= spans.len());
        }
        for pair in lists.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn list_output_is_deterministic(tokens in tagged_tokens()) {
        let (words, poses) = columns(&tokens);
        let sentence = TaggedSentence::parse(&words, &poses).unwrap();
        let coordinator = ListCoordinator::new(Lexicons::standard());
        prop_assert_eq!(
            coordinator.memberships("d", "s", &sentence),
            coordinator.memberships("d", "s", &sentence)
        );
    }
}
