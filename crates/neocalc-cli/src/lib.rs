//! NeoCalc CLI Library
//!
//! Command-line front end for the NeoCalc keystroke calculator: one-shot
//! key sequences, an interactive session, and the keypad layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, OutputFormatArg, PressArgs, ReplArgs};
pub use config::{load_display_config, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;
pub use repl::run_repl;
pub use session::{expand_word, Session, Step, Summary};
