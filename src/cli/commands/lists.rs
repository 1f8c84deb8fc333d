//! Lists command - coordinated list memberships

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};
use super::InputArgs;

use crate::lists::ListCoordinator;

/// Input: `document_id, sentence_id, words, poses`.
pub fn cmd_lists(args: InputArgs, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global).map_err(|e| format_error("lists", &e.to_string()))?;
    let lexicons = config.lexicons();
    run_inputs(&ListCoordinator::new(&lexicons), &args.inputs, global)?;
    Ok(())
}
