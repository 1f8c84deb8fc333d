//! Location commands - gazetteer candidates, features and supervision

use super::super::output::format_error;
use super::super::parser::GlobalArgs;
use super::super::utils::{load_config, run_inputs};
use super::InputArgs;

use crate::kb::Gazetteer;
use crate::labelers::{GazetteerLocationLabeler, GazetteerSupervisor, LocationFeatureStage};
use crate::lexicon::Lexicons;
use crate::Result;

fn load(global: &GlobalArgs) -> Result<(Gazetteer, Lexicons)> {
    let config = load_config(global)?;
    let gazetteer = Gazetteer::load(&config.gazetteer_path(), config.gazetteer.layout)?;
    Ok((gazetteer, config.lexicons()))
}

/// Input: `sentence_id, words, poses`.
pub fn cmd_locations(args: InputArgs, global: &GlobalArgs) -> std::result::Result<(), String> {
    let (gazetteer, lexicons) =
        load(global).map_err(|e| format_error("locations", &e.to_string()))?;
    let stage = GazetteerLocationLabeler::new(&gazetteer, &lexicons);
    run_inputs(&stage, &args.inputs, global)?;
    Ok(())
}

/// Input: `sentence_id, words, poses, mention_num, from, to`.
pub fn cmd_location_features(
    args: InputArgs,
    global: &GlobalArgs,
) -> std::result::Result<(), String> {
    let (gazetteer, lexicons) =
        load(global).map_err(|e| format_error("location-features", &e.to_string()))?;
    let stage = LocationFeatureStage::new(&gazetteer, &lexicons);
    run_inputs(&stage, &args.inputs, global)?;
    Ok(())
}

/// Input: `sentence_id, mention_num, text, from, to, value`.
pub fn cmd_supervise_locations(
    args: InputArgs,
    global: &GlobalArgs,
) -> std::result::Result<(), String> {
    let (gazetteer, _) =
        load(global).map_err(|e| format_error("supervise-locations", &e.to_string()))?;
    let stage = GazetteerSupervisor::new(&gazetteer);
    run_inputs(&stage, &args.inputs, global)?;
    Ok(())
}
