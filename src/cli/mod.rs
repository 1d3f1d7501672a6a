//! Line-oriented shell that plays the role of one budgeting screen.

pub mod commands;
pub mod core;
pub mod output;
mod shell;
pub mod table;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
