//! Entities command - knowledge-base joined candidates

use std::path::PathBuf;

use clap::Parser;
use kbner_core::EntityKind;

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};

use crate::kb::KnowledgeBaseIndex;
use crate::labelers::KnowledgeBaseLabeler;

/// Label proper-noun spans against the knowledge base
#[derive(Parser, Debug, Clone)]
pub struct EntitiesArgs {
    /// Kind the labels are positive for (location, company, person)
    #[arg(short, long, default_value = "location")]
    pub target: EntityKind,

    /// Input TSV files (document_id, sentence_id, words, poses); stdin when none
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

/// Loads the knowledge base once, then streams the inputs.
pub fn cmd_entities(args: EntitiesArgs, global: &GlobalArgs) -> Result<(), String> {
    let fail = |e: crate::Error| format_error("entities", &e.to_string());
    let config = load_config(global).map_err(fail)?;
    let lexicons = config.lexicons();
    let kb = KnowledgeBaseIndex::load(&config).map_err(fail)?;

    log::info!("labeling for target {}", args.target);
    let labeler = KnowledgeBaseLabeler::new(&kb, &lexicons, args.target);
    run_inputs(&labeler, &args.inputs, global)?;
    Ok(())
}
