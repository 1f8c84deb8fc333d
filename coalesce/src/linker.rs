//! Pairwise mention compatibility within one document.

use kbner_core::tsv::{columns_from, parse_list, tokens};
use kbner_core::{Error, FeatureSet, Label, PairCandidate, Stage, SUBRECORD_DELIM};

/// Mention count above which a document is logged as expensive.
pub const DEFAULT_WARN_ABOVE: usize = 500;

/// One mention of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention<'a> {
    /// Mention id from the extraction stage.
    pub id: &'a str,
    /// Surface name.
    pub name: &'a str,
}

impl<'a> Mention<'a> {
    /// Create a mention.
    #[must_use]
    pub fn new(id: &'a str, name: &'a str) -> Self {
        Self { id, name }
    }
}

/// Whether one name, ignoring case, starts with the other.
///
/// Symmetric: `is_prefix("IBM", "IBM Corp") == is_prefix("IBM Corp", "IBM")`.
///
/// ```
/// use kbner_coalesce::is_prefix;
///
/// assert!(is_prefix("ibm corp", "IBM"));
/// assert!(!is_prefix("IBM", "Apple"));
/// ```
#[must_use]
pub fn is_prefix(a: &str, b: &str) -> bool {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    a.starts_with(&b) || b.starts_with(&a)
}

/// Emits every ordered pair `(i, j)` with `j <= i` of a document's mentions.
///
/// The work is quadratic in the mention count, so documents above the warn
/// threshold are logged.
///
/// Input: `document_id, mention_ids, names, froms, tos`, with ids, froms and
/// tos space-separated and names `|^|`-separated.
#[derive(Debug, Clone)]
pub struct CrossReferenceLinker {
    warn_above: usize,
}

impl CrossReferenceLinker {
    /// Create a linker with the default warn threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            warn_above: DEFAULT_WARN_ABOVE,
        }
    }

    /// Set the mention count above which a document is logged.
    #[must_use]
    pub fn with_warn_threshold(mut self, warn_above: usize) -> Self {
        self.warn_above = warn_above;
        self
    }

    /// Features of the pair `(mention, proto)`.
    #[must_use]
    pub fn pair_features(&self, mention: &str, proto: &str) -> FeatureSet {
        let mut features = FeatureSet::new();
        if is_prefix(mention, proto) {
            features.insert("IS_PREFIX");
        }
        features
    }

    /// All pairs, grouped by the later mention.
    #[must_use]
    pub fn link(&self, mentions: &[Mention<'_>]) -> Vec<PairCandidate> {
        let mut pairs = Vec::with_capacity(mentions.len() * (mentions.len() + 1) / 2);
        for (i, mention) in mentions.iter().enumerate() {
            for proto in &mentions[..=i] {
                pairs.push(PairCandidate {
                    mention_id: mention.id.to_string(),
                    proto_mention_id: proto.id.to_string(),
                    label: Label::Unknown,
                    features: self.pair_features(mention.name, proto.name),
                });
            }
        }
        pairs
    }
}

impl Default for CrossReferenceLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for CrossReferenceLinker {
    type Record = PairCandidate;

    fn name(&self) -> &'static str {
        "orglinks"
    }

    fn columns(&self) -> usize {
        5
    }

    fn process(&self, cols: &[&str], out: &mut Vec<PairCandidate>) -> kbner_core::Result<()> {
        let [document_id, ids, names, froms, tos] = columns_from(cols)?;
        let ids = tokens(ids);
        let names: Vec<&str> = names.split(SUBRECORD_DELIM).collect();
        // offsets are validated but do not affect pairing
        let froms: Vec<usize> = parse_list(froms, "froms")?;
        let tos: Vec<usize> = parse_list(tos, "tos")?;

        let n = ids.len();
        if names.len() != n || froms.len() != n || tos.len() != n {
            return Err(Error::invalid_input(format!(
                "document {document_id}: {n} mention ids, {} names, {} froms, {} tos",
                names.len(),
                froms.len(),
                tos.len()
            )));
        }
        if n > self.warn_above {
            log::warn!(
                "document {} has {} mentions; emitting {} pairs",
                document_id,
                n,
                n * (n + 1) / 2
            );
        }

        let mentions: Vec<Mention<'_>> = ids
            .into_iter()
            .zip(names)
            .map(|(id, name)| Mention::new(id, name))
            .collect();
        out.extend(self.link(&mentions));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs_of(names: &[&str]) -> Vec<(String, String, bool)> {
        let ids: Vec<String> = (0..names.len()).map(|i| format!("m{i}")).collect();
        let mentions: Vec<Mention<'_>> = ids
            .iter()
            .zip(names)
            .map(|(id, name)| Mention::new(id, name))
            .collect();
        CrossReferenceLinker::new()
            .link(&mentions)
            .into_iter()
            .map(|p| {
                let prefix = p.features.contains("IS_PREFIX");
                (p.mention_id, p.proto_mention_id, prefix)
            })
            .collect()
    }

    #[test]
    fn ibm_and_apple() {
        let pairs = pairs_of(&["IBM", "IBM Corp", "Apple"]);
        let expected: Vec<(String, String, bool)> = [
            ("m0", "m0", true),
            ("m1", "m0", true),
            ("m1", "m1", true),
            ("m2", "m0", false),
            ("m2", "m1", false),
            ("m2", "m2", true),
        ]
        .iter()
        .map(|(a, b, f)| (a.to_string(), b.to_string(), *f))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn prefix_ignores_case_both_ways() {
        assert!(is_prefix("IBM", "ibm corp"));
        assert!(is_prefix("IBM CORP", "ibm"));
        assert!(!is_prefix("Apple", "Applied Materials"));
    }

    #[test]
    fn stage_validates_counts() {
        let linker = CrossReferenceLinker::new();
        let mut out = Vec::new();
        assert!(linker
            .process(&["d", "a b", "IBM|^|IBM Corp", "0 3", "1"], &mut out)
            .is_err());
        assert!(linker
            .process(&["d", "a b", "IBM|^|IBM Corp", "0 x", "1 5"], &mut out)
            .is_err());
        linker
            .process(&["d", "a b", "IBM|^|IBM Corp", "0 3", "1 5"], &mut out)
            .unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| p.label == Label::Unknown));
    }

    proptest! {
        #[test]
        fn pair_count_is_triangular(names in prop::collection::vec("[A-Za-z]{1,6}", 0..20)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let n = refs.len();
            prop_assert_eq!(pairs_of(&refs).len(), n * (n + 1) / 2);
        }

        #[test]
        fn every_mention_pairs_with_itself(names in prop::collection::vec("[A-Za-z ]{1,8}", 1..10)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let pairs = pairs_of(&refs);
            for i in 0..refs.len() {
                let id = format!("m{i}");
                prop_assert!(pairs.iter().any(|(a, b, prefix)| *a == id && *b == id && *prefix));
            }
        }

        #[test]
        fn prefix_is_symmetric(a in "[A-Za-z]{0,6}", b in "[A-Za-z]{0,6}") {
            prop_assert_eq!(is_prefix(&a, &b), is_prefix(&b, &a));
        }
    }
}
