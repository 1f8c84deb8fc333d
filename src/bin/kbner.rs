//! kbner - distant-supervision candidate extraction CLI
//!
//! Streams tab-separated records through one extraction stage.
//!
//! # Usage
//!
//! ```bash
//! # Proper-noun spans
//! kbner spans sentences.tsv
//!
//! # Knowledge-base labels for people
//! kbner entities --target person --data-dir data/ sentences.tsv
//!
//! # City candidates from the gazetteer
//! kbner locations --gazetteer data/cities1000_with_ids.txt < sentences.tsv
//!
//! # Offline type closure
//! kbner closure relations.tsv > data/wikidata/transitive.tsv
//! ```

use std::process::ExitCode;

use clap::Parser;

use kbner::cli::commands::{closure, context, entities, lists, locations, orglinks, orgs, spans};
use kbner::cli::{Cli, Commands, GlobalArgs};

fn init_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    // stdout carries records, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);
    let global = &cli.global;

    let result: Result<(), String> = match cli.command {
        Commands::Spans(args) => spans::cmd_spans(args, global),
        Commands::Entities(args) => entities::cmd_entities(args, global),
        Commands::Locations(args) => locations::cmd_locations(args, global),
        Commands::LocationFeatures(args) => locations::cmd_location_features(args, global),
        Commands::SuperviseLocations(args) => locations::cmd_supervise_locations(args, global),
        Commands::Orgs(args) => orgs::cmd_orgs(args, global),
        Commands::Lists(args) => lists::cmd_lists(args, global),
        Commands::Orglinks(args) => orglinks::cmd_orglinks(args, global),
        Commands::Context(args) => context::cmd_context(args, global),
        Commands::Closure(args) => closure::cmd_closure(args, global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
