//! Subcommand implementations

pub mod completions;
pub mod generate;
