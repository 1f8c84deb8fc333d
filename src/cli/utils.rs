//! Utility functions for CLI commands

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use kbner_core::Stage;

use super::output::{format_error, log_summary, stdout_writer};
use super::parser::GlobalArgs;
use crate::config::PipelineConfig;
use crate::stream::{run_stage, RunStats};
use crate::{Error, Result};

/// Path that stands for stdin.
pub const STDIN: &str = "-";

/// Load the configuration file, if any, and apply command-line overrides.
pub fn load_config(global: &GlobalArgs) -> Result<PipelineConfig> {
    let mut config = match &global.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = &global.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(path) = &global.type_closure {
        config.knowledge_base.type_closure = path.clone();
    }
    if let Some(path) = &global.names {
        config.knowledge_base.names = path.clone();
    }
    if let Some(path) = &global.gazetteer {
        config.gazetteer.path = path.clone();
    }
    if let Some(layout) = global.gazetteer_layout {
        config.gazetteer.layout = layout;
    }
    if let Some(language) = &global.language {
        config.knowledge_base.language = match language.as_str() {
            "any" | "*" => None,
            code => Some(code.to_string()),
        };
    }
    Ok(config)
}

/// Input paths to read; stdin when none were given.
pub fn input_paths(inputs: &[PathBuf]) -> Vec<PathBuf> {
    if inputs.is_empty() {
        vec![PathBuf::from(STDIN)]
    } else {
        inputs.to_vec()
    }
}

/// Fail on the first input file that does not exist.
pub fn check_inputs(inputs: &[PathBuf]) -> Result<()> {
    match inputs
        .iter()
        .find(|p| p.as_os_str() != STDIN && !p.exists())
    {
        Some(missing) => Err(Error::missing_file(missing)),
        None => Ok(()),
    }
}

/// Open one input for line reading.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }
    if !path.exists() {
        return Err(Error::missing_file(path));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Display name of an input in messages.
pub fn input_name(path: &Path) -> String {
    if path.as_os_str() == STDIN {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Run `stage` over every input in order, writing to stdout.
///
/// All inputs are checked before the first record is read.
pub fn run_inputs<S: Stage + ?Sized>(
    stage: &S,
    inputs: &[PathBuf],
    global: &GlobalArgs,
) -> std::result::Result<RunStats, String> {
    let inputs = input_paths(inputs);
    check_inputs(&inputs).map_err(|e| format_error(stage.name(), &e.to_string()))?;

    let mut writer = stdout_writer();
    let mut total = RunStats::default();
    for path in &inputs {
        let stats = open_input(path)
            .and_then(|reader| run_stage(stage, reader, &mut writer, global.format))
            .map_err(|e| {
                format_error(stage.name(), &format!("{}: {}", input_name(path), e))
            })?;
        total.add(stats);
    }
    log_summary(stage.name(), total);
    Ok(total)
}
