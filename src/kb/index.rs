//! Name → entity index over the type-filtered knowledge base.
//!
//! Built from two relations:
//!
//! - type closure: `entity_id \t type_code`, already transitively resolved
//! - names: `entity_id \t language \t label|alias \t text`
//!
//! Only entities with at least one tracked type make it into the name index.
//! That filter is what keeps the index small enough that each candidate span
//! costs one hash probe. Names shared by several entities keep every entity,
//! in file order.

use std::collections::HashMap;
use std::path::Path;

use kbner_core::{EntityKind, KindSet};

use super::read_lines;
use crate::config::{PipelineConfig, TypeCodes};
use crate::{Error, Result};

/// Whether a name is an entity's primary label or one of its aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Primary label.
    Label,
    /// Alternative name.
    Alias,
}

impl std::str::FromStr for NameKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "label" => Ok(NameKind::Label),
            "alias" => Ok(NameKind::Alias),
            other => Err(format!("unknown name kind {other:?}")),
        }
    }
}

/// One entity carrying a given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Knowledge-base id.
    pub entity_id: u64,
    /// Language code of the name.
    pub language: String,
    /// Label or alias.
    pub kind: NameKind,
    /// Tracked kinds of the entity.
    pub kinds: KindSet,
}

#[derive(Debug, Clone, Default)]
struct NameGroup {
    entries: Vec<NameEntry>,
    kinds: KindSet,
}

/// Immutable knowledge-base lookup structure.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseIndex {
    types: HashMap<u64, KindSet>,
    names: HashMap<String, NameGroup>,
}

impl KnowledgeBaseIndex {
    /// Start an in-memory build.
    #[must_use]
    pub fn builder(codes: TypeCodes) -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder {
            codes,
            language: None,
            types: HashMap::new(),
            names: HashMap::new(),
        }
    }

    /// Load both relations as configured.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        Self::load_files(
            &config.type_closure_path(),
            &config.names_path(),
            config.knowledge_base.type_codes,
            config.knowledge_base.language.as_deref(),
        )
    }

    /// Load from explicit files.
    ///
    /// Both files are checked for existence before either is read.
    pub fn load_files(
        type_closure: &Path,
        names: &Path,
        codes: TypeCodes,
        language: Option<&str>,
    ) -> Result<Self> {
        for path in [type_closure, names] {
            if !path.exists() {
                return Err(Error::missing_file(path));
            }
        }

        let mut builder = Self::builder(codes);
        if let Some(language) = language {
            builder = builder.language(language);
        }

        log::info!("loading type closure from {}", type_closure.display());
        let mut rows = 0usize;
        for (idx, line) in read_lines(type_closure)?.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let (entity_id, code) = parse_type_row(&line)
                .map_err(|msg| Error::knowledge_base(type_closure, idx + 1, msg))?;
            builder.add_type(entity_id, code);
            rows += 1;
        }
        log::info!(
            "type closure: {} rows, {} tracked entities",
            rows,
            builder.types.len()
        );

        log::info!("loading names from {}", names.display());
        let mut kept = 0usize;
        for (idx, line) in read_lines(names)?.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let row =
                parse_name_row(&line).map_err(|msg| Error::knowledge_base(names, idx + 1, msg))?;
            if builder.add_name(row.0, row.1, row.2, row.3) {
                kept += 1;
            }
        }
        let index = builder.build();
        log::info!(
            "names: kept {} rows, {} distinct names",
            kept,
            index.name_count()
        );
        Ok(index)
    }

    /// Tracked kinds of an entity; empty when the entity is untracked.
    #[must_use]
    pub fn types_of(&self, entity_id: u64) -> KindSet {
        self.types.get(&entity_id).copied().unwrap_or_default()
    }

    /// Entities carrying exactly this name; empty when the name is unknown.
    #[must_use]
    pub fn entities_named(&self, name: &str) -> &[NameEntry] {
        self.names
            .get(name)
            .map(|group| group.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Union of the kinds of every entity carrying this name.
    #[must_use]
    pub fn kinds_named(&self, name: &str) -> KindSet {
        self.names
            .get(name)
            .map(|group| group.kinds)
            .unwrap_or_default()
    }

    /// True when the name belongs to `kind` and to no other tracked kind.
    #[must_use]
    pub fn is_exclusively_type(&self, name: &str, kind: EntityKind) -> bool {
        self.kinds_named(name) == KindSet::only(kind)
    }

    /// The only tracked kind carrying this name, if exactly one does.
    #[must_use]
    pub fn exclusive_kind(&self, name: &str) -> Option<EntityKind> {
        self.kinds_named(name).single()
    }

    /// Number of tracked entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.types.len()
    }

    /// Number of distinct indexed names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }
}

/// Accumulates rows, then freezes into a [`KnowledgeBaseIndex`].
///
/// Type rows must be added before the names that refer to them: a name row
/// whose entity has no tracked type yet is dropped.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseBuilder {
    codes: TypeCodes,
    language: Option<String>,
    types: HashMap<u64, KindSet>,
    names: HashMap<String, Vec<(u64, String, NameKind)>>,
}

impl KnowledgeBaseBuilder {
    /// Keep only names in `language`.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Record one type-closure row. Returns false for untracked type codes.
    pub fn add_type(&mut self, entity_id: u64, type_code: u64) -> bool {
        match self.codes.kind_of(type_code) {
            Some(kind) => {
                self.types.entry(entity_id).or_default().insert(kind);
                true
            }
            None => false,
        }
    }

    /// Record one name row. Returns false when the row is filtered out.
    pub fn add_name(
        &mut self,
        entity_id: u64,
        language: &str,
        kind: NameKind,
        text: &str,
    ) -> bool {
        if !self.types.contains_key(&entity_id) {
            return false;
        }
        if self.language.as_deref().is_some_and(|l| l != language) {
            return false;
        }
        self.names
            .entry(text.to_string())
            .or_default()
            .push((entity_id, language.to_string(), kind));
        true
    }

    /// Freeze the index.
    #[must_use]
    pub fn build(self) -> KnowledgeBaseIndex {
        let types = self.types;
        let names = self
            .names
            .into_iter()
            .map(|(name, rows)| {
                let entries: Vec<NameEntry> = rows
                    .into_iter()
                    .map(|(entity_id, language, kind)| NameEntry {
                        entity_id,
                        language,
                        kind,
                        kinds: types.get(&entity_id).copied().unwrap_or_default(),
                    })
                    .collect();
                let kinds = entries
                    .iter()
                    .fold(KindSet::empty(), |acc, e| acc.union(e.kinds));
                (name, NameGroup { entries, kinds })
            })
            .collect();
        KnowledgeBaseIndex { types, names }
    }
}

fn parse_type_row(line: &str) -> std::result::Result<(u64, u64), String> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < 2 {
        return Err(format!("expected 2 columns, found {}", cols.len()));
    }
    let entity_id = cols[0]
        .trim()
        .parse()
        .map_err(|_| format!("bad entity id {:?}", cols[0]))?;
    let code = cols[1]
        .trim()
        .parse()
        .map_err(|_| format!("bad type code {:?}", cols[1]))?;
    Ok((entity_id, code))
}

fn parse_name_row(line: &str) -> std::result::Result<(u64, &str, NameKind, &str), String> {
    let cols: Vec<&str> = line.splitn(4, '\t').collect();
    if cols.len() < 4 {
        return Err(format!("expected 4 columns, found {}", cols.len()));
    }
    let entity_id = cols[0]
        .trim()
        .parse()
        .map_err(|_| format!("bad entity id {:?}", cols[0]))?;
    let kind = cols[2].parse()?;
    Ok((entity_id, cols[1], kind, cols[3].trim_end()))
}
