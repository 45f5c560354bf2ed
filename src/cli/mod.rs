//! Line-oriented shell driving one in-memory ledger.

pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
pub mod shell;

pub use self::core::{CliError, CliMode, CommandError, LoopControl, ShellClock, ShellContext};
pub use shell::{run_cli, run_script, SCRIPT_ENV_VAR};
