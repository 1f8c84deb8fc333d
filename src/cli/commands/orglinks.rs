//! Orglinks command - within-document mention pairs

use std::path::PathBuf;

use clap::Parser;

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};

use kbner_coalesce::CrossReferenceLinker;

/// Pair every mention of a document with every earlier mention
#[derive(Parser, Debug, Clone)]
pub struct OrglinksArgs {
    /// Warn about documents with more mentions than this (overrides config)
    #[arg(long, value_name = "N")]
    pub warn_above: Option<usize>,

    /// Input TSV files (document_id, mention_ids, names, froms, tos); stdin when none
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

/// Input: `document_id, mention_ids, names, froms, tos`.
pub fn cmd_orglinks(args: OrglinksArgs, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global).map_err(|e| format_error("orglinks", &e.to_string()))?;
    let warn_above = args
        .warn_above
        .unwrap_or(config.linker.warn_above_mentions);
    let linker = CrossReferenceLinker::new().with_warn_threshold(warn_above);
    run_inputs(&linker, &args.inputs, global)?;
    Ok(())
}
