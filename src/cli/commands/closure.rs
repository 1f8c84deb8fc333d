//! Closure command - offline type closure over Wikidata relations

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use super::super::output::{format_error, stdout_writer};
use super::super::parser::GlobalArgs;
use super::super::utils::{check_inputs, input_name, input_paths, open_input, STDIN};

use crate::kb::{Relation, SubclassGraph, TypeClosure, DEFAULT_SEEDS};
use crate::stream::write_record;
use crate::Result;

/// Resolve which items fall under each seed class
#[derive(Parser, Debug, Clone)]
pub struct ClosureArgs {
    /// Seed class id (repeatable); defaults to the tracked location, company
    /// and person classes
    #[arg(long = "seed", value_name = "ID")]
    pub seeds: Vec<u64>,

    /// Relation TSV files (id1, relation, id2); stdin when none
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

fn run(args: &ClosureArgs, global: &GlobalArgs) -> Result<usize> {
    let inputs = input_paths(&args.inputs);
    check_inputs(&inputs)?;

    // Files are read twice, once for the class graph and once for the
    // assignment; stdin cannot be rewound, so its rows are kept.
    let mut stdin_rows: Option<Vec<Relation>> = None;
    let mut graph = SubclassGraph::default();
    let mut rows_read = 0usize;
    for path in &inputs {
        if is_stdin(path) {
            let rows = stdin_rows.get_or_insert(Relation::read_from(
                open_input(path)?,
                Path::new(&input_name(path)),
            )?);
            for rel in rows.iter() {
                graph.add_relation(rel);
            }
            rows_read += rows.len();
        } else {
            for rel in Relation::stream_file(path)? {
                graph.add_relation(&rel?);
                rows_read += 1;
            }
        }
    }
    log::info!(
        "closure: read {} relation rows, {} classes",
        rows_read,
        graph.class_count()
    );

    let seeds: &[u64] = if args.seeds.is_empty() {
        DEFAULT_SEEDS
    } else {
        &args.seeds
    };
    let closure = TypeClosure::compute(&graph, seeds);
    let mut assigner = closure.assigner();

    let mut writer = stdout_writer();
    let mut rows = Vec::new();
    let mut emitted = 0usize;
    for path in &inputs {
        if is_stdin(path) {
            for rel in stdin_rows.iter().flatten() {
                assigner.push(rel, &mut rows);
            }
        } else {
            for rel in Relation::stream_file(path)? {
                assigner.push(&rel?, &mut rows);
                for row in rows.drain(..) {
                    write_record(&mut writer, &row, global.format)?;
                    emitted += 1;
                }
            }
        }
        for row in rows.drain(..) {
            write_record(&mut writer, &row, global.format)?;
            emitted += 1;
        }
    }
    writer.flush()?;
    Ok(emitted)
}

/// Builds the class graph in a first pass over the inputs, then assigns
/// items in a second.
pub fn cmd_closure(args: ClosureArgs, global: &GlobalArgs) -> std::result::Result<(), String> {
    let emitted = run(&args, global).map_err(|e| format_error("closure", &e.to_string()))?;
    log::info!("closure: {} rows out", emitted);
    Ok(())
}
