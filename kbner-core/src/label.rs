//! Three-valued distant-supervision labels.

use serde::{Deserialize, Serialize};

use crate::tsv::NULL;
use crate::{Error, Result};

/// Weak supervision label attached to a candidate mention.
///
/// Serialized to TSV as `1` / `0` / `\N`. `Unknown` is the default and is
/// never promoted to `Positive` implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Certainly a mention of the target type.
    Positive,
    /// Certainly not a mention of the target type.
    Negative,
    /// No evidence either way.
    #[default]
    Unknown,
}

impl Label {
    /// Build a label from a boolean verdict.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// The label after a downgrading rule fired.
    ///
    /// Downgrades always land on `Negative`, whatever the prior value.
    #[must_use]
    pub const fn downgrade(self) -> Self {
        Label::Negative
    }

    /// Whether this label carries any evidence.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Label::Unknown)
    }

    /// TSV column value.
    #[must_use]
    pub const fn as_tsv(&self) -> &'static str {
        match self {
            Label::Positive => "1",
            Label::Negative => "0",
            Label::Unknown => NULL,
        }
    }

    /// Parse a TSV column value. Accepts `1`/`0`/`\N` and `t`/`f`/`true`/`false`.
    pub fn from_tsv(value: &str) -> Result<Self> {
        match value {
            "1" | "t" | "true" | "True" => Ok(Label::Positive),
            "0" | "f" | "false" | "False" => Ok(Label::Negative),
            NULL => Ok(Label::Unknown),
            other => Err(Error::parse(format!("not a label: {other:?}"))),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tsv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_values() {
        assert_eq!(Label::Positive.as_tsv(), "1");
        assert_eq!(Label::Negative.as_tsv(), "0");
        assert_eq!(Label::Unknown.as_tsv(), "\\N");
        assert_eq!(Label::default(), Label::Unknown);
    }

    #[test]
    fn downgrade_never_upgrades() {
        assert_eq!(Label::Positive.downgrade(), Label::Negative);
        assert_eq!(Label::Unknown.downgrade(), Label::Negative);
        assert_eq!(Label::Negative.downgrade(), Label::Negative);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Label::from_tsv("\\N").unwrap(), Label::Unknown);
        assert_eq!(Label::from_tsv("True").unwrap(), Label::Positive);
        assert!(Label::from_tsv("maybe").is_err());
    }
}
