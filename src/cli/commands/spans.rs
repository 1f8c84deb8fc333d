//! Spans command - proper-noun spans of each sentence

use super::super::parser::GlobalArgs;
use super::super::output::format_error;
use super::super::utils::{load_config, run_inputs};
use super::InputArgs;

use crate::spanner::{NounPhraseSpanner, SpanStage};

/// Input: `sentence_id, words, poses`.
pub fn cmd_spans(args: InputArgs, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global).map_err(|e| format_error("spans", &e.to_string()))?;
    let lexicons = config.lexicons();
    let stage = SpanStage::new(NounPhraseSpanner::new(&lexicons));
    run_inputs(&stage, &args.inputs, global)?;
    Ok(())
}
