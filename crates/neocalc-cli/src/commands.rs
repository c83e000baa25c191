//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// NeoCalc: an eight-character keystroke calculator
#[derive(Parser, Debug)]
#[command(name = "neocalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Display configuration file (JSON)
    #[arg(long, global = true, env = "NEOCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the final display
    ///
    /// Tokens are key names as a keyboard reports them: digits, `.`, `+`,
    /// `-`, `*`, `/`, `=`, `Enter`, `Backspace`, `Delete`. A word that is not
    /// a key but is made only of single-character keys is pressed one
    /// character at a time, so `12+3=` works.
    Press(PressArgs),

    /// Interactive session reading keys from stdin
    Repl(ReplArgs),

    /// Show the keypad layout
    Keys,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Key tokens to press in order
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Print one line per key (token, transition, display, state)
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Print one line per key instead of the display per line
    #[arg(long)]
    pub trace: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
