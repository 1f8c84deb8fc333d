//! Entity kinds tracked by the knowledge base.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Coarse entity type a candidate can be supervised against.
///
/// The knowledge base may assert several kinds for one entity; see [`KindSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Geographic location (cities, countries, regions).
    Location,
    /// Business organization.
    Company,
    /// Human being.
    Person,
}

impl EntityKind {
    /// Every kind, in serialization order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Location, EntityKind::Company, EntityKind::Person];

    /// Lowercase name used in feature tags and config files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::Company => "company",
            EntityKind::Person => "person",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            EntityKind::Location => 0b001,
            EntityKind::Company => 0b010,
            EntityKind::Person => 0b100,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "location" | "loc" | "gpe" => Ok(EntityKind::Location),
            "company" | "org" | "organization" => Ok(EntityKind::Company),
            "person" | "per" => Ok(EntityKind::Person),
            other => Err(Error::parse(format!("unknown entity kind: {other:?}"))),
        }
    }
}

/// Small set of [`EntityKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u8);

impl KindSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A set holding exactly `kind`.
    #[must_use]
    pub const fn only(kind: EntityKind) -> Self {
        Self(kind.bit())
    }

    /// Add a kind.
    pub fn insert(&mut self, kind: EntityKind) {
        self.0 |= kind.bit();
    }

    /// Union of two sets.
    #[must_use]
    pub const fn union(self, other: KindSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(&self, kind: EntityKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Whether no kind is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The single kind in the set, if it holds exactly one.
    #[must_use]
    pub fn single(&self) -> Option<EntityKind> {
        let mut kinds = self.iter();
        match (kinds.next(), kinds.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }

    /// Kinds in [`EntityKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = EntityKind> {
        let set = *self;
        EntityKind::ALL.into_iter().filter(move |k| set.contains(*k))
    }
}

impl FromIterator<EntityKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = EntityKind>>(iter: I) -> Self {
        let mut set = KindSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_only_for_singletons() {
        assert_eq!(KindSet::empty().single(), None);
        assert_eq!(
            KindSet::only(EntityKind::Person).single(),
            Some(EntityKind::Person)
        );
        let both: KindSet = [EntityKind::Location, EntityKind::Company]
            .into_iter()
            .collect();
        assert_eq!(both.single(), None);
        assert_eq!(
            both.iter().collect::<Vec<_>>(),
            vec![EntityKind::Location, EntityKind::Company]
        );
    }

    #[test]
    fn parse_kind() {
        assert_eq!("LOC".parse::<EntityKind>().unwrap(), EntityKind::Location);
        assert_eq!("company".parse::<EntityKind>().unwrap(), EntityKind::Company);
        assert!("thing".parse::<EntityKind>().is_err());
    }
}
