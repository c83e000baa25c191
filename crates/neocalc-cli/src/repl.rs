//! Interactive session
//!
//! Each input line is split on whitespace and pressed word by word. After a
//! line the display is printed, or one trace line per key with `--trace`.
//! `quit` or `exit` ends the session, as does end of input.

use std::io::{BufRead, Write};

use crate::error::CliResult;
use crate::output::Printer;
use crate::session::Session;

/// Runs the read-press-print loop until `quit`, `exit` or end of input
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    printer: &mut Printer<W>,
    trace: bool,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            _ => {}
        }

        session.clear_steps();
        session.run(&words);
        if trace {
            for step in session.steps() {
                printer.step(step)?;
            }
        } else {
            printer.display(session.display(), session.state())?;
        }
    }
    tracing::debug!(display = session.display(), "session ended");
    Ok(())
}
