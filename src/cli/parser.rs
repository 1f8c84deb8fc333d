//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::kb::GazetteerLayout;
use crate::stream::OutputFormat;

use super::commands;

/// Distant-supervision candidate extraction for named entities
#[derive(Parser, Debug)]
#[command(name = "kbner")]
#[command(
    author,
    version,
    about = "Distant-supervision candidate extraction for named entities",
    long_about = r#"
kbner - distant-supervision candidate extraction for named entities

Every command reads tab-separated records from the given files (or stdin)
and writes tab-separated records to stdout, one input record at a time.
`\N` is NULL, labels are 1 / 0 / \N.

KNOWLEDGE:
  entities             Wikidata type closure + names (--type-closure, --names)
  locations, location-features, supervise-locations
                       city gazetteer (--gazetteer)
  spans, orgs, lists, orglinks, context, closure
                       none beyond the built-in word lists

EXAMPLES:
  kbner spans sentences.tsv
  kbner entities --target person --data-dir data/ sentences.tsv
  kbner locations --gazetteer data/cities1000_with_ids.txt < sentences.tsv
  kbner closure --seed 5 relations.tsv > transitive.tsv
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Stage to run
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base directory for relative knowledge-base paths
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Type-closure relation (entity_id, type_code)
    #[arg(long, global = true, value_name = "PATH")]
    pub type_closure: Option<PathBuf>,

    /// Entity-names relation (entity_id, language, kind, text)
    #[arg(long, global = true, value_name = "PATH")]
    pub names: Option<PathBuf>,

    /// City gazetteer file
    #[arg(long, global = true, value_name = "PATH")]
    pub gazetteer: Option<PathBuf>,

    /// Column layout of the gazetteer file
    #[arg(long, global = true, value_enum)]
    pub gazetteer_layout: Option<GazetteerLayout>,

    /// Keep only knowledge-base names in this language ("any" keeps all)
    #[arg(long, global = true, value_name = "CODE")]
    pub language: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// More log output on stderr (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// One subcommand per pipeline stage
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Proper-noun spans, including and-joined spans
    Spans(commands::InputArgs),

    /// Candidates labeled against the knowledge base for one target kind
    #[command(visible_alias = "e")]
    Entities(commands::EntitiesArgs),

    /// City candidates labeled against the gazetteer
    #[command(visible_alias = "loc")]
    Locations(commands::InputArgs),

    /// Gazetteer features of already extracted location mentions
    LocationFeatures(commands::InputArgs),

    /// Mark location mentions with a single gazetteer reading
    SuperviseLocations(commands::InputArgs),

    /// Company candidates from multi-sentence documents and their titles
    #[command(visible_alias = "org")]
    Orgs(commands::InputArgs),

    /// Coordinated list memberships
    Lists(commands::InputArgs),

    /// Within-document mention pairs
    Orglinks(commands::OrglinksArgs),

    /// Surrounding-word features of mentions
    Context(commands::InputArgs),

    /// Transitive type closure over subclass/instance relations
    Closure(commands::ClosureArgs),
}
