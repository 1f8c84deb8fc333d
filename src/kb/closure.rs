//! Offline type closure over `subclass_of` / `instance_of` relations.
//!
//! For each seed class, collect every class reachable downwards through
//! `subclass_of` edges, then assign every item with an `instance_of` edge into
//! that set to the seed. The output is the `(entity_id, type_code)` relation
//! that [`KnowledgeBaseIndex`](super::KnowledgeBaseIndex) loads.
//!
//! Traversal is iterative with a visited set, so cyclic class graphs
//! terminate.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use kbner_core::ClosureRow;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use super::read_lines;
use crate::{Error, Result};

/// Wikidata property P279.
pub const SUBCLASS_OF: u64 = 279;

/// Wikidata property P31.
pub const INSTANCE_OF: u64 = 31;

/// Seed classes: geographic location, country, cities of several sizes,
/// business, human.
pub const DEFAULT_SEEDS: &[u64] = &[2_221_906, 6256, 1_637_706, 1_549_591, 515, 783_794, 5];

/// One `subject \t property \t object` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    /// Subject item.
    pub subject: u64,
    /// Property id.
    pub property: u64,
    /// Object item.
    pub object: u64,
}

impl Relation {
    /// Parse one row.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let cols: Vec<&str> = line.trim_end_matches(['\n', '\r']).split('\t').collect();
        if cols.len() != 3 {
            return Err(format!("expected 3 columns, found {}", cols.len()));
        }
        let field = |i: usize, what: &str| -> std::result::Result<u64, String> {
            cols[i]
                .trim()
                .parse()
                .map_err(|_| format!("bad {what} {:?}", cols[i]))
        };
        Ok(Relation {
            subject: field(0, "subject")?,
            property: field(1, "property")?,
            object: field(2, "object")?,
        })
    }

    /// Lazily parse the rows of a relation file.
    pub fn stream_file(path: &Path) -> Result<impl Iterator<Item = Result<Relation>>> {
        let source = path.to_path_buf();
        Ok(read_lines(path)?
            .enumerate()
            .filter_map(move |(idx, line)| Self::parse_line(line, &source, idx + 1)))
    }

    /// Lazily parse the rows of an open stream; `source` names it in errors.
    pub fn stream<R: BufRead>(reader: R, source: PathBuf) -> impl Iterator<Item = Result<Relation>> {
        reader
            .lines()
            .enumerate()
            .filter_map(move |(idx, line)| Self::parse_line(line, &source, idx + 1))
    }

    /// Read every row from an open stream.
    pub fn read_from<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Relation>> {
        Self::stream(reader, source.to_path_buf()).collect()
    }

    fn parse_line(
        line: std::io::Result<String>,
        source: &Path,
        line_no: usize,
    ) -> Option<Result<Relation>> {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::knowledge_base(source, line_no, e.to_string()))),
        };
        if line.is_empty() {
            return None;
        }
        Some(Self::parse(&line).map_err(|msg| Error::knowledge_base(source, line_no, msg)))
    }
}

/// Directed `parent -> subclass` graph over class ids.
#[derive(Debug, Clone, Default)]
pub struct SubclassGraph {
    graph: DiGraphMap<u64, ()>,
}

impl SubclassGraph {
    /// Collect the `subclass_of` edges; other properties are ignored.
    pub fn from_relations<'a>(relations: impl IntoIterator<Item = &'a Relation>) -> Self {
        let mut graph = Self::default();
        for rel in relations {
            graph.add_relation(rel);
        }
        graph
    }

    /// Record `rel` if it is a `subclass_of` edge.
    pub fn add_relation(&mut self, rel: &Relation) {
        if rel.property == SUBCLASS_OF {
            self.add_edge(rel.object, rel.subject);
        }
    }

    /// Add one parent -> child edge.
    pub fn add_edge(&mut self, parent: u64, child: u64) {
        self.graph.add_edge(parent, child, ());
    }

    /// Number of classes seen in any edge.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.graph.node_count()
    }

    /// `root` and every class below it.
    #[must_use]
    pub fn descendants(&self, root: u64) -> HashSet<u64> {
        let mut reachable = HashSet::from([root]);
        if !self.graph.contains_node(root) {
            return reachable;
        }
        let mut dfs = Dfs::new(&self.graph, root);
        while let Some(class) = dfs.next(&self.graph) {
            reachable.insert(class);
        }
        reachable
    }
}

/// Reachable class sets, one per seed.
#[derive(Debug, Clone)]
pub struct TypeClosure {
    classes: Vec<(u64, HashSet<u64>)>,
}

impl TypeClosure {
    /// Resolve every seed against the graph.
    #[must_use]
    pub fn compute(graph: &SubclassGraph, seeds: &[u64]) -> Self {
        let classes = seeds
            .iter()
            .map(|&seed| {
                let reachable = graph.descendants(seed);
                log::debug!("seed {}: {} classes", seed, reachable.len());
                (seed, reachable)
            })
            .collect();
        Self { classes }
    }

    /// Seeds whose closure contains `class`, in seed order.
    pub fn seeds_of(&self, class: u64) -> impl Iterator<Item = u64> + '_ {
        self.classes
            .iter()
            .filter(move |(_, set)| set.contains(&class))
            .map(|(seed, _)| *seed)
    }

    /// Start assigning rows one at a time.
    #[must_use]
    pub fn assigner(&self) -> Assigner<'_> {
        Assigner {
            closure: self,
            seen: HashSet::new(),
        }
    }

    /// Assign items to seeds through their `instance_of` edges.
    ///
    /// Each `(item, seed)` pair is emitted once, at its first supporting row.
    pub fn assign<'a>(&self, relations: impl IntoIterator<Item = &'a Relation>) -> Vec<ClosureRow> {
        let mut assigner = self.assigner();
        let mut rows = Vec::new();
        for rel in relations {
            assigner.push(rel, &mut rows);
        }
        rows
    }
}

/// Incremental [`TypeClosure::assign`], for relation files too large to hold.
#[derive(Debug)]
pub struct Assigner<'c> {
    closure: &'c TypeClosure,
    seen: HashSet<ClosureRow>,
}

impl Assigner<'_> {
    /// Append the rows `rel` newly supports.
    pub fn push(&mut self, rel: &Relation, out: &mut Vec<ClosureRow>) {
        if rel.property != INSTANCE_OF {
            return;
        }
        for seed in self.closure.seeds_of(rel.object) {
            let row = ClosureRow {
                entity_id: rel.subject,
                type_code: seed,
            };
            if self.seen.insert(row) {
                out.push(row);
            }
        }
    }
}
