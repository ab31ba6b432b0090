//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ColorChoice, OutputFormat};

/// keycalc: drive the keypad calculator from the command line
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys given on the command line and print the display
    ///
    /// Example: keycalc eval 3 + 4 × 2 =
    Eval(EvalArgs),

    /// Press keys read from a file (whitespace separated, # comments)
    Script(ScriptArgs),

    /// Interactive session reading keys from stdin
    Repl(ReplArgs),

    /// Print the keypad layout
    Keypad(KeypadArgs),
}

/// Options shared by commands that press a batch of keys
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Fail on the first rejected key instead of ignoring it
    #[arg(long)]
    pub strict: bool,

    /// Print every key with the display it produced
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Keys to press, in order
    #[arg(required = true, allow_hyphen_values = true, value_name = "KEY")]
    pub keys: Vec<String>,

    /// Run options
    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the script command
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Key script to run
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Run options
    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Report rejected keys instead of ignoring them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the keypad command
#[derive(Args, Debug)]
pub struct KeypadArgs {
    /// Show the captions of inverted mode
    #[arg(long)]
    pub inverted: bool,
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Final display only
    #[default]
    Text,
    /// Snapshot and transcript as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
