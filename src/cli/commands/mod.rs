//! Command implementations for kbner CLI
//!
//! Each command has its own module/file for better organization.

pub mod closure;
pub mod context;
pub mod entities;
pub mod lists;
pub mod locations;
pub mod orglinks;
pub mod orgs;
pub mod spans;

use std::path::PathBuf;

use clap::Parser;

// Re-export argument types for parser
pub use closure::ClosureArgs;
pub use entities::EntitiesArgs;
pub use orglinks::OrglinksArgs;

/// Input files shared by the record-streaming commands
#[derive(Parser, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input TSV files; stdin when none or `-`
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}
