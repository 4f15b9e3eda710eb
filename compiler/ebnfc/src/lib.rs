//! EBNF highlighter CLI library.
//!
//! The `ebnf` binary is a thin dispatcher over [`commands`]; everything it
//! prints is produced by `render_*` functions here so it can be tested
//! without spawning a process.

pub mod commands;
mod error;
mod input;
mod options;
mod tracing_setup;

pub use error::CliError;
pub use input::read_source;
pub use options::{parse_lex_options, parse_stats_options, LexOptions, OutputFormat, StatsOptions};
pub use tracing_setup::init_tracing;
