//! Interactive terminal shell over the coffee ledger.

pub mod chart;
mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use self::core::{balance_line, CommandError, CommandResult, LoopControl};
pub use shell::{run_cli, run_script, SCRIPT_ENV_VAR};
pub use shell_context::{CliMode, ShellContext};
