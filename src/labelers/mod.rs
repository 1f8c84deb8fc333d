//! Distant-supervision labelers.
//!
//! Every labeler joins proper-noun spans against preloaded knowledge and
//! assigns a [`Label`] through an ordered rule cascade:
//!
//! 1. start at `Unknown`
//! 2. a knowledge rule may set `Positive` or `Negative`
//! 3. lexical and positional rules may then only push the label to `Negative`
//!
//! The order is significant: rules are applied in program order and a later
//! rule never promotes a label. The organization labeler is the exception: its
//! ticker/suffix evidence is final and skips step 3 entirely.
//!
//! | Labeler | Knowledge | Drops unmatched spans |
//! |---------|-----------|-----------------------|
//! | [`KnowledgeBaseLabeler`] | type-filtered name index | no (`Unknown`) |
//! | [`GazetteerLocationLabeler`] | city gazetteer | yes |
//! | [`OrganizationLabeler`] | tickers, suffixes | no |

pub mod context;
pub mod entity;
pub mod location;
pub mod organization;

use kbner_core::{EntityKind, Label, TaggedSentence, TokenSpan};

use crate::lexicon::Lexicons;

pub use context::ContextFeaturizer;
pub use entity::KnowledgeBaseLabeler;
pub use location::{GazetteerLocationLabeler, GazetteerSupervisor, LocationFeatureStage};
pub use organization::{OrganizationLabeler, TitleScanner};

/// A lexical or positional rule that can only push a label to `Negative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downgrade {
    /// The next token is `said`: speakers are people and organizations.
    FollowedBySaid,
    /// The last token is an organizational suffix word.
    EndsWithOrgType,
    /// The last token is a month name.
    EndsWithMonth,
    /// Some token is an honorific or office title.
    ContainsTitle,
    /// The last token ends with `>`, a stray ticker bracket.
    TickerArtifact,
}

impl Downgrade {
    /// Whether the rule fires for `span`.
    #[must_use]
    pub fn fires(&self, sentence: &TaggedSentence<'_>, span: &TokenSpan, lexicons: &Lexicons) -> bool {
        let words = sentence.slice(span);
        let last = words.last().copied().unwrap_or_default();
        match self {
            Downgrade::FollowedBySaid => sentence.word(span.end) == Some("said"),
            Downgrade::EndsWithOrgType => lexicons.is_org_type(last),
            Downgrade::EndsWithMonth => lexicons.is_month(last),
            Downgrade::ContainsTitle => words.iter().any(|w| lexicons.is_title(w)),
            Downgrade::TickerArtifact => last.ends_with('>'),
        }
    }
}

const LOCATION_RULES: &[Downgrade] = &[
    Downgrade::FollowedBySaid,
    Downgrade::EndsWithOrgType,
    Downgrade::EndsWithMonth,
    Downgrade::ContainsTitle,
    Downgrade::TickerArtifact,
];

const PERSON_RULES: &[Downgrade] = &[
    Downgrade::EndsWithOrgType,
    Downgrade::EndsWithMonth,
    Downgrade::TickerArtifact,
];

const COMPANY_RULES: &[Downgrade] = &[Downgrade::EndsWithMonth, Downgrade::ContainsTitle];

/// Downgrade rules that apply when supervising for `target`, in order.
#[must_use]
pub fn downgrade_rules(target: EntityKind) -> &'static [Downgrade] {
    match target {
        EntityKind::Location => LOCATION_RULES,
        EntityKind::Person => PERSON_RULES,
        EntityKind::Company => COMPANY_RULES,
    }
}

/// Run `rules` in order over `label`.
#[must_use]
pub fn apply_downgrades(
    mut label: Label,
    rules: &[Downgrade],
    sentence: &TaggedSentence<'_>,
    span: &TokenSpan,
    lexicons: &Lexicons,
) -> Label {
    for rule in rules {
        if rule.fires(sentence, span, lexicons) {
            label = label.downgrade();
        }
    }
    label
}
