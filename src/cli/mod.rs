//! CLI library modules for the kbner binary.
//!
//! This module provides reusable CLI functionality that can be tested
//! independently of the binary's `main`.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{Cli, Commands, GlobalArgs};
