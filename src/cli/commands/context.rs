//! Context command - surrounding-word features

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};
use super::InputArgs;

use crate::labelers::ContextFeaturizer;

/// Input: `sentence_id, mention_num, from, to, words, poses`.
pub fn cmd_context(args: InputArgs, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global).map_err(|e| format_error("context", &e.to_string()))?;
    let lexicons = config.lexicons();
    run_inputs(&ContextFeaturizer::new(&lexicons), &args.inputs, global)?;
    Ok(())
}
