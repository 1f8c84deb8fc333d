//! Closed word lists used by the supervision heuristics.
//!
//! These are small, fixed, high-precision lists. They are built once into an
//! immutable [`Lexicons`] value and passed by reference to every labeler.
//! Matching is exact and case-sensitive: `May` the month, not `may` the verb.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Honorifics and office titles that precede person names in news copy
const TITLES: &[&str] = &[
    "Chairman",
    "Secretary",
    "Attorney",
    "President",
    "Representative",
    "Spokesman",
    "Delegation",
    "Minister",
    "Ambassador",
];

// Words ending organization names; a location never ends with one
const ORG_TYPES: &[&str] = &[
    "Plc",
    "Plc.",
    "Ltd",
    "Ltd.",
    "Corp",
    "Corp.",
    "Corporation",
    "Inc",
    "Inc.",
    "Associates",
    "Committee",
    "Department",
    "Government",
    "Federation",
    "Council",
    "Ministry",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "AB",
    "AG",
    "GmbH",
    "SE",
    "Plc",
    "Plc.",
    "Ltd",
    "Ltd.",
    "Co.",
    "Co",
    "Corp",
    "Corp.",
    "Corporation",
    "Inc",
    "Inc.",
    "Associates",
    "Bros.",
    "Bank",
];

// Generic institutional nouns: organizations, but not companies
const ORG_GENERIC: &[&str] = &[
    "Committee",
    "Department",
    "Government",
    "Federation",
    "Council",
    "Ministry",
];

static STANDARD: Lazy<Lexicons> = Lazy::new(Lexicons::build_standard);

/// Which word list to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconKind {
    /// Month names.
    Months,
    /// Honorific and office titles.
    Titles,
    /// Organizational suffix words (location negatives).
    OrgTypes,
    /// Company legal-form suffixes (company positives).
    CompanySuffixes,
    /// Generic institutional nouns.
    OrgGeneric,
}

/// Immutable bundle of the heuristic word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicons {
    months: HashSet<String>,
    titles: HashSet<String>,
    org_types: HashSet<String>,
    company_suffixes: HashSet<String>,
    org_generic: HashSet<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl Lexicons {
    /// The built-in lists, shared process-wide.
    #[must_use]
    pub fn standard() -> &'static Lexicons {
        &STANDARD
    }

    fn build_standard() -> Self {
        fn set(words: &[&str]) -> HashSet<String> {
            words.iter().map(|w| (*w).to_string()).collect()
        }
        Self {
            months: set(MONTHS),
            titles: set(TITLES),
            org_types: set(ORG_TYPES),
            company_suffixes: set(COMPANY_SUFFIXES),
            org_generic: set(ORG_GENERIC),
        }
    }

    /// Return a copy with extra words added to one list.
    #[must_use]
    pub fn with_words<I, S>(mut self, kind: LexiconKind, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_mut(kind).extend(words.into_iter().map(Into::into));
        self
    }

    fn list(&self, kind: LexiconKind) -> &HashSet<String> {
        match kind {
            LexiconKind::Months => &self.months,
            LexiconKind::Titles => &self.titles,
            LexiconKind::OrgTypes => &self.org_types,
            LexiconKind::CompanySuffixes => &self.company_suffixes,
            LexiconKind::OrgGeneric => &self.org_generic,
        }
    }

    fn list_mut(&mut self, kind: LexiconKind) -> &mut HashSet<String> {
        match kind {
            LexiconKind::Months => &mut self.months,
            LexiconKind::Titles => &mut self.titles,
            LexiconKind::OrgTypes => &mut self.org_types,
            LexiconKind::CompanySuffixes => &mut self.company_suffixes,
            LexiconKind::OrgGeneric => &mut self.org_generic,
        }
    }

    /// Exact membership test.
    #[must_use]
    pub fn contains(&self, kind: LexiconKind, word: &str) -> bool {
        self.list(kind).contains(word)
    }

    /// Month name.
    #[must_use]
    pub fn is_month(&self, word: &str) -> bool {
        self.months.contains(word)
    }

    /// Honorific or office title.
    #[must_use]
    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word)
    }

    /// Organizational suffix word.
    #[must_use]
    pub fn is_org_type(&self, word: &str) -> bool {
        self.org_types.contains(word)
    }

    /// Company legal-form suffix.
    #[must_use]
    pub fn is_company_suffix(&self, word: &str) -> bool {
        self.company_suffixes.contains(word)
    }

    /// Generic institutional noun.
    #[must_use]
    pub fn is_org_generic(&self, word: &str) -> bool {
        self.org_generic.contains(word)
    }

    /// A span holding this word must not be merged across `and`.
    #[must_use]
    pub fn blocks_and_join(&self, word: &str) -> bool {
        self.is_month(word)
            || self.is_title(word)
            || self.is_org_generic(word)
            || self.is_company_suffix(word)
    }

    /// Sentence-level evidence that nearby capitalized phrases are not companies.
    #[must_use]
    pub fn is_non_company_cue(&self, word: &str) -> bool {
        self.is_month(word) || self.is_title(word) || self.is_org_generic(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists() {
        let lex = Lexicons::standard();
        assert!(lex.is_month("May"));
        assert!(!lex.is_month("may"));
        assert!(lex.is_title("Minister"));
        assert!(lex.is_company_suffix("GmbH"));
        assert!(lex.is_org_type("Ministry"));
        assert!(!lex.is_company_suffix("Ministry"));
    }

    #[test]
    fn and_join_blockers() {
        let lex = Lexicons::standard();
        for w in ["June", "President", "Council", "Inc."] {
            assert!(lex.blocks_and_join(w), "{w} should block");
        }
        assert!(!lex.blocks_and_join("Paris"));
    }

    #[test]
    fn extra_words_do_not_touch_standard() {
        let lex = Lexicons::default().with_words(LexiconKind::Titles, ["Apple"]);
        assert!(lex.is_title("Apple"));
        assert!(!Lexicons::standard().is_title("Apple"));
        assert!(lex.contains(LexiconKind::Titles, "Apple"));
    }
}
