//! TSV record codec shared by every stage.
//!
//! Conventions:
//! - columns are separated by a single tab, records by a newline
//! - `\N` is SQL-style NULL
//! - set-valued columns are written as `{a,b,c}`
//! - `|^|` separates independent sub-records packed into one column

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// SQL-style NULL marker.
pub const NULL: &str = "\\N";

/// Separator for sub-records packed into one column.
pub const SUBRECORD_DELIM: &str = "|^|";

/// Split one input line into exactly `expected` tab-separated columns.
///
/// The trailing line terminator is ignored. Any other column count is a
/// malformed record.
pub fn columns(line: &str, expected: usize) -> Result<Vec<&str>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() != expected {
        return Err(Error::malformed(expected, cols.len()));
    }
    Ok(cols)
}

/// Destructure already-split columns into a fixed-size array.
pub fn columns_from<'a, const N: usize>(cols: &[&'a str]) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(cols).map_err(|_| Error::malformed(N, cols.len()))
}

/// Split a space-joined token column.
#[must_use]
pub fn tokens(column: &str) -> Vec<&str> {
    column.split(' ').collect()
}

/// Parse one column, naming it in the error.
pub fn parse_field<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::parse(format!("{what}: not a number: {value:?}")))
}

/// Parse a space-separated list of numbers.
pub fn parse_list<T: FromStr>(column: &str, what: &str) -> Result<Vec<T>> {
    tokens(column)
        .into_iter()
        .map(|v| parse_field(v, what))
        .collect()
}

/// Anything that renders as one TSV output line (without the newline).
pub trait TsvRecord {
    /// Render the record's columns joined by tabs.
    fn to_tsv(&self) -> String;
}

/// Insertion-ordered set of feature tags.
///
/// Order is kept so that output is byte-for-byte reproducible; duplicate tags
/// are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    items: Vec<String>,
}

impl FeatureSet {
    /// Create an empty feature set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag unless already present.
    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.items.contains(&tag) {
            self.items.push(tag);
        }
    }

    /// Whether the tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.items.iter().any(|t| t == tag)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for FeatureSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

/// Renders as an array literal: `{a,b}`. Elements with separators,
/// quotes, backslashes or whitespace are double-quoted.
impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_array_element(f, item)?;
        }
        f.write_str("}")
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

fn write_array_element(f: &mut fmt::Formatter<'_>, item: &str) -> fmt::Result {
    let needs_quotes = item.is_empty()
        || item.eq_ignore_ascii_case("null")
        || item
            .chars()
            .any(|c| matches!(c, ',' | '{' | '}' | '"' | '\\') || c.is_whitespace());
    if !needs_quotes {
        return f.write_str(item);
    }
    f.write_str("\"")?;
    for c in item.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_checks_count() {
        assert_eq!(columns("a\tb\tc\n", 3).unwrap(), vec!["a", "b", "c"]);
        let err = columns("a\tb", 3).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn columns_keeps_empty_trailing_column() {
        assert_eq!(columns("a\t\r\n", 2).unwrap(), vec!["a", ""]);
    }

    #[test]
    fn feature_set_dedupes_in_order() {
        let set: FeatureSet = ["b", "a", "b"].into_iter().collect();
        assert_eq!(set.to_string(), "{b,a}");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn feature_set_quotes_special_elements() {
        let set: FeatureSet = ["BEFORE_,_the", "plain", "say \"hi\""].into_iter().collect();
        assert_eq!(
            set.to_string(),
            "{\"BEFORE_,_the\",plain,\"say \\\"hi\\\"\"}"
        );
    }

    #[test]
    fn empty_feature_set() {
        assert_eq!(FeatureSet::new().to_string(), "{}");
    }

    #[test]
    fn parse_field_names_column() {
        let err = parse_field::<usize>("x1", "token_from").unwrap_err();
        assert!(err.to_string().contains("token_from"));
        assert_eq!(parse_list::<usize>("1 2 3", "froms").unwrap(), vec![1, 2, 3]);
    }
}
