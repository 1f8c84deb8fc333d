//! Pipeline configuration.
//!
//! Loaded from a TOML file and overridden field by field from the command
//! line. Relative knowledge-base paths resolve against `data_dir`.
//!
//! ```toml
//! data_dir = "/srv/kbner/data"
//!
//! [knowledge_base]
//! type_closure = "wikidata/transitive.tsv"
//! names = "wikidata/names.tsv"
//! language = "en"
//!
//! [knowledge_base.type_codes]
//! location = 2221906
//! company = 783794
//! person = 5
//!
//! [gazetteer]
//! path = "cities1000_with_ids.txt"
//! layout = "with_ids"
//!
//! [lexicons]
//! titles = ["Governor"]
//! ```

use std::path::{Path, PathBuf};

use kbner_core::EntityKind;
use serde::Deserialize;

use crate::kb::GazetteerLayout;
use crate::lexicon::{LexiconKind, Lexicons};
use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Base directory for relative paths; the working directory when unset.
    pub data_dir: Option<PathBuf>,
    /// Type-closure and name relations.
    pub knowledge_base: KnowledgeBaseConfig,
    /// City gazetteer.
    pub gazetteer: GazetteerConfig,
    /// Cross-reference linking.
    pub linker: LinkerConfig,
    /// Words added to the built-in lexicons.
    pub lexicons: LexiconExtras,
}

/// Where the knowledge-base relations live and how to read them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnowledgeBaseConfig {
    /// `(entity_id, type_code)` relation.
    pub type_closure: PathBuf,
    /// `(entity_id, language, kind, text)` relation.
    pub names: PathBuf,
    /// Keep only names in this language; all languages when unset.
    pub language: Option<String>,
    /// Seed type codes of the tracked kinds.
    pub type_codes: TypeCodes,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            type_closure: PathBuf::from("wikidata/transitive.tsv"),
            names: PathBuf::from("wikidata/names.tsv"),
            language: Some("en".to_string()),
            type_codes: TypeCodes::default(),
        }
    }
}

/// Knowledge-base type codes of the tracked kinds (Wikidata Q-numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeCodes {
    /// Geographic location.
    pub location: u64,
    /// Business.
    pub company: u64,
    /// Human.
    pub person: u64,
}

impl Default for TypeCodes {
    fn default() -> Self {
        Self {
            location: 2_221_906,
            company: 783_794,
            person: 5,
        }
    }
}

impl TypeCodes {
    /// The tracked kind a code stands for, if any.
    #[must_use]
    pub fn kind_of(&self, code: u64) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| self.code_of(*kind) == code)
    }

    /// The code of a tracked kind.
    #[must_use]
    pub fn code_of(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Location => self.location,
            EntityKind::Company => self.company,
            EntityKind::Person => self.person,
        }
    }
}

/// City gazetteer location and column layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GazetteerConfig {
    /// Tab-separated city file.
    pub path: PathBuf,
    /// Column layout of `path`.
    pub layout: GazetteerLayout,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cities1000_with_ids.txt"),
            layout: GazetteerLayout::WithIds,
        }
    }
}

/// Cross-reference linker settings.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkerConfig {
    /// Log a warning for documents with more mentions than this.
    pub warn_above_mentions: usize,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            warn_above_mentions: 500,
        }
    }
}

/// Extra lexicon words, merged into the built-in lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconExtras {
    /// Extra month names.
    pub months: Vec<String>,
    /// Extra titles.
    pub titles: Vec<String>,
    /// Extra organizational suffix words.
    pub org_types: Vec<String>,
    /// Extra company suffixes.
    pub company_suffixes: Vec<String>,
    /// Extra generic institution words.
    pub org_generic: Vec<String>,
}

impl PipelineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::missing_file(path));
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }

    /// Resolve a possibly relative path against `data_dir`.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved type-closure path.
    #[must_use]
    pub fn type_closure_path(&self) -> PathBuf {
        self.resolve(&self.knowledge_base.type_closure)
    }

    /// Resolved names path.
    #[must_use]
    pub fn names_path(&self) -> PathBuf {
        self.resolve(&self.knowledge_base.names)
    }

    /// Resolved gazetteer path.
    #[must_use]
    pub fn gazetteer_path(&self) -> PathBuf {
        self.resolve(&self.gazetteer.path)
    }

    /// Built-in lexicons plus the configured extras.
    #[must_use]
    pub fn lexicons(&self) -> Lexicons {
        let extras = &self.lexicons;
        Lexicons::default()
            .with_words(LexiconKind::Months, extras.months.iter().cloned())
            .with_words(LexiconKind::Titles, extras.titles.iter().cloned())
            .with_words(LexiconKind::OrgTypes, extras.org_types.iter().cloned())
            .with_words(
                LexiconKind::CompanySuffixes,
                extras.company_suffixes.iter().cloned(),
            )
            .with_words(LexiconKind::OrgGeneric, extras.org_generic.iter().cloned())
    }
}
