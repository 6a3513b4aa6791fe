//! CLI module for pxsort
//!
//! Invocation: `pxsort <source> <destination> <query>`. Exit code 0 on
//! success; any parse, configuration, or I/O failure is terminal and
//! exits non-zero with no output image written.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, run_with};
pub use errors::{CliError, CliErrorCode, CliResult};
