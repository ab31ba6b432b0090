//! keycalc: command-line front end for the keypad calculator
//!
//! ```bash
//! keycalc eval 3 + 4 × 2 =          # 14
//! keycalc eval --format json 1 . .  # snapshot + transcript
//! keycalc script sums.keys
//! keycalc repl
//! keycalc keypad --inverted
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod runner;

pub use commands::{
    Cli, ColorArg, Commands, EvalArgs, FormatArg, KeypadArgs, ReplArgs, RunArgs, ScriptArgs,
};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{Printer, SessionReport};
pub use runner::{run_keys, run_repl, tokenize_script};
