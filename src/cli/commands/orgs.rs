//! Orgs command - company candidates

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};
use super::InputArgs;

use crate::labelers::OrganizationLabeler;

/// Input: `document_id, words, poses, title_words`.
pub fn cmd_orgs(args: InputArgs, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global).map_err(|e| format_error("orgs", &e.to_string()))?;
    let lexicons = config.lexicons();
    run_inputs(&OrganizationLabeler::new(&lexicons), &args.inputs, global)?;
    Ok(())
}
