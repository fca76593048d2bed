//! Command-line interface
//!
//! Provides the `inspect`, `query`, `stats`, and `interactive` commands
//! over a database loaded from the configured data files.

mod args;
mod commands;
mod errors;
mod shell;

pub use args::{Cli, Command, QueryArgs};
pub use commands::{inspect, load_database, query, run, run_command};
pub use errors::{CliError, CliResult};
