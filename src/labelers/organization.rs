//! Company candidates from newswire documents.
//!
//! Reuters-style copy marks listed companies with their ticker in angle
//! brackets: `Apple Inc <AAPL.O>`, or brackets the company name itself in
//! headlines: `<Apple Inc> posts record quarter`. Both are strong evidence,
//! as is a multi-token name closing with a legal-form suffix.

use kbner_core::tsv::{columns_from, tokens};
use kbner_core::{
    Error, FeatureSet, Label, OrgCandidate, SpanOrigin, Stage, TaggedSentence, TokenSpan,
    SUBRECORD_DELIM,
};

use crate::lexicon::Lexicons;
use crate::spanner::NounPhraseSpanner;

/// Sentence number given to mentions found in the document title.
pub const TITLE_SENTENCE: i64 = -1;

/// `<X>` with non-empty `X`.
fn is_angle_bracketed(word: &str) -> bool {
    word.len() >= 3 && word.starts_with('<') && word.ends_with('>')
}

fn strip_brackets(word: &str) -> &str {
    word.strip_prefix('<')
        .and_then(|w| w.strip_suffix('>'))
        .unwrap_or(word)
}

/// Name and ticker read off one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceForm<'s> {
    /// Name tokens.
    pub name: Vec<&'s str>,
    /// Ticker symbol, when the span ends in one.
    pub ticker: Option<&'s str>,
    /// The whole span was a single bracketed name.
    pub bracketed: bool,
}

impl<'s> SurfaceForm<'s> {
    /// Split the span's tokens into name and ticker.
    #[must_use]
    pub fn read(words: &[&'s str]) -> Self {
        match words {
            [only] if is_angle_bracketed(only) => SurfaceForm {
                name: vec![strip_brackets(only)],
                ticker: None,
                bracketed: true,
            },
            [rest @ .., last] if is_angle_bracketed(last) => SurfaceForm {
                name: rest.to_vec(),
                ticker: Some(strip_brackets(last)),
                bracketed: false,
            },
            _ => SurfaceForm {
                name: words.to_vec(),
                ticker: None,
                bracketed: false,
            },
        }
    }

    /// Space-joined name.
    #[must_use]
    pub fn name(&self) -> String {
        self.name.join(" ")
    }
}

/// Labels proper-noun spans of every sentence of a document as company
/// candidates, and scans the title for bracketed companies.
///
/// Input: `document_id, words, poses, title_words`, where `words` and
/// `poses` pack one sentence per `|^|`-separated sub-record.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationLabeler<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> OrganizationLabeler<'a> {
    /// Create a labeler with the given lexicons.
    #[must_use]
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self { lexicons }
    }

    /// Label one span; returns the label and the evidence features.
    #[must_use]
    pub fn label_form(
        &self,
        form: &SurfaceForm<'_>,
        sentence: &TaggedSentence<'_>,
    ) -> (Label, FeatureSet) {
        let mut features = FeatureSet::new();
        if form.ticker.is_some() {
            features.insert("has_ticker");
        }
        if form.bracketed {
            features.insert("bracketed");
        }
        let suffix = match form.name.as_slice() {
            [_, .., last] if self.lexicons.is_company_suffix(last) => Some(*last),
            _ => None,
        };
        if let Some(suffix) = suffix {
            features.insert(format!("suffix_{suffix}"));
        }

        if form.ticker.is_some() || suffix.is_some() {
            return (Label::Positive, features);
        }
        let cue = sentence
            .words()
            .iter()
            .any(|w| self.lexicons.is_non_company_cue(w));
        let label = if cue { Label::Negative } else { Label::Unknown };
        (label, features)
    }

    /// Candidates for one body sentence.
    #[must_use]
    pub fn label_sentence(
        &self,
        document_id: &str,
        sentence_num: usize,
        sentence: &TaggedSentence<'_>,
    ) -> Vec<OrgCandidate> {
        let spans = NounPhraseSpanner::new(self.lexicons).spans_with_and_joins(sentence);
        spans
            .iter()
            .enumerate()
            .map(|(mention_num, span)| {
                let form = SurfaceForm::read(sentence.slice(span));
                let (label, mut features) = self.label_form(&form, sentence);
                if span.origin == SpanOrigin::AndJoined {
                    features.insert("and_joined");
                }
                OrgCandidate {
                    mention_id: format!(
                        "{}_{}_{}_{}",
                        document_id, sentence_num, span.start, span.end
                    ),
                    document_id: document_id.to_string(),
                    sentence_num: sentence_num as i64,
                    mention_num,
                    name: form.name(),
                    start: span.start,
                    end: span.end,
                    label,
                    ticker: form.ticker.map(str::to_string),
                    features,
                }
            })
            .collect()
    }
}

impl Stage for OrganizationLabeler<'_> {
    type Record = OrgCandidate;

    fn name(&self) -> &'static str {
        "orgs"
    }

    fn columns(&self) -> usize {
        4
    }

    fn process(&self, cols: &[&str], out: &mut Vec<OrgCandidate>) -> kbner_core::Result<()> {
        let [document_id, words, poses, title_words] = columns_from(cols)?;
        let sentence_words: Vec<&str> = words.split(SUBRECORD_DELIM).collect();
        let sentence_poses: Vec<&str> = poses.split(SUBRECORD_DELIM).collect();
        if sentence_words.len() != sentence_poses.len() {
            return Err(Error::invalid_input(format!(
                "{} word sentences but {} tag sentences",
                sentence_words.len(),
                sentence_poses.len()
            )));
        }

        out.extend(TitleScanner::scan(document_id, &tokens(title_words)));
        for (sentence_num, (words, poses)) in
            sentence_words.into_iter().zip(sentence_poses).enumerate()
        {
            let sentence = TaggedSentence::parse(words, poses)?;
            out.extend(self.label_sentence(document_id, sentence_num, &sentence));
        }
        Ok(())
    }
}

/// Finds bracketed companies and tickers in a headline.
///
/// `Apple Inc <AAPL.O> posts record` yields `Apple Inc` with ticker `AAPL.O`
/// when the text before the bracket starts with the ticker's first letter.
/// Any other bracketed token is taken as a company name on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleScanner;

impl TitleScanner {
    /// All title mentions, positive, numbered from zero.
    #[must_use]
    pub fn scan(document_id: &str, title: &[&str]) -> Vec<OrgCandidate> {
        let mut out = Vec::new();
        for (i, word) in title.iter().enumerate() {
            if !(word.starts_with('<') && word.ends_with('>')) {
                continue;
            }
            let inner = strip_brackets(word);
            let Some(initial) = inner.chars().next() else {
                continue;
            };

            let before = title[..i].join(" ");
            let (span, name, ticker, feature) = if before.starts_with(initial) {
                (TokenSpan::run(0, i + 1), before, Some(inner), "title_abbreviation")
            } else {
                (TokenSpan::run(i, i + 1), inner.to_string(), None, "title_bracket")
            };
            out.push(OrgCandidate {
                mention_id: format!(
                    "{}_{}_{}_{}",
                    document_id, TITLE_SENTENCE, span.start, span.end
                ),
                document_id: document_id.to_string(),
                sentence_num: TITLE_SENTENCE,
                mention_num: out.len(),
                name,
                start: span.start,
                end: span.end,
                label: Label::Positive,
                ticker: ticker.map(str::to_string),
                features: std::iter::once(feature).collect(),
            });
        }
        out
    }
}
