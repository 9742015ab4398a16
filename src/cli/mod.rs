//! Command-line interface: `export` and `stats` subcommands

pub mod commands;

pub use commands::{Cli, Commands, ExportArgs, run};
