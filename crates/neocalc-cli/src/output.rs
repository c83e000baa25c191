//! Terminal output

use std::io::Write;

use console::style;
use neocalc::wasm::WasmKeypad;
use neocalc::State;

use crate::error::CliResult;
use crate::session::{Step, Summary};

/// Writes results to a sink, colored when enabled
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl<W: Write> Printer<W> {
    /// Create a printer over `out`
    #[must_use]
    pub const fn new(out: W, use_color: bool, quiet: bool) -> Self {
        Self {
            out,
            use_color,
            quiet,
        }
    }

    /// Consumes the printer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the display. The display is the result, so quiet mode keeps it.
    pub fn display(&mut self, text: &str, state: State) -> CliResult<()> {
        if self.use_color && state.errored() {
            writeln!(self.out, "{}", style(text).red().bold())?;
        } else if self.use_color && state.result_ready() {
            writeln!(self.out, "{}", style(text).green().bold())?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    /// Prints one trace line: token, outcome, display, state
    pub fn step(&mut self, step: &Step) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let outcome = match (&step.transition, &step.rejected) {
            (Some(transition), _) => format!("{transition:?}"),
            (None, Some(reason)) => format!("rejected: {reason}"),
            (None, None) => String::from("-"),
        };
        let outcome = if self.use_color && step.is_rejected() {
            style(outcome).yellow().to_string()
        } else if self.use_color {
            style(outcome).cyan().to_string()
        } else {
            outcome
        };
        writeln!(
            self.out,
            "{:>9}  {outcome:<40} [{}] {:?}",
            step.token, step.display, step.state
        )?;
        Ok(())
    }

    /// Prints a summary as a JSON document
    pub fn json(&mut self, summary: &Summary<'_>) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.out, summary)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints the keypad grid with each button's label
    pub fn keypad(&mut self, keypad: &WasmKeypad) -> CliResult<()> {
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            let mut line = String::new();
            for col in 0..cols {
                let cell = keypad
                    .get_button_at(row, col)
                    .map_or("", |button| button.key.label());
                line.push_str(&format!("[{cell:^5}]"));
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }
        if !self.quiet {
            writeln!(
                self.out,
                "{}",
                style("keys: 0-9 . + - * / = Enter Backspace Delete").dim()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn plain() -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), false, false)
    }

    fn text(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_display_plain() {
        let mut printer = plain();
        printer.display("42", State::ResultDisplayed).unwrap();
        assert_eq!(text(printer), "42\n");
    }

    #[test]
    fn test_display_survives_quiet() {
        let mut printer = Printer::new(Vec::new(), false, true);
        printer.display("7", State::EnteringFirstOperand).unwrap();
        assert_eq!(text(printer), "7\n");
    }

    #[test]
    fn test_step_line() {
        let mut session = Session::new();
        let mut printer = plain();
        printer.step(session.step("3")).unwrap();
        printer.step(session.step("+")).unwrap();
        printer.step(session.step("=")).unwrap();
        let out = text(printer);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Edited"));
        assert!(lines[1].contains("OperatorCaptured"));
        assert!(lines[2].contains("rejected:"));
        assert!(lines[2].contains("[0]"));
    }

    #[test]
    fn test_step_quiet() {
        let mut session = Session::new();
        let mut printer = Printer::new(Vec::new(), false, true);
        printer.step(session.step("3")).unwrap();
        assert!(text(printer).is_empty());
    }

    #[test]
    fn test_json_summary() {
        let mut session = Session::new();
        session.run(&["9-4="]);
        let mut printer = plain();
        printer.json(&Summary::of(&session, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text(printer)).unwrap();
        assert_eq!(value["display"], "5");
    }

    #[test]
    fn test_keypad_grid() {
        let mut printer = Printer::new(Vec::new(), false, true);
        printer.keypad(&WasmKeypad::new()).unwrap();
        let out = text(printer);
        assert_eq!(out.lines().count(), WasmKeypad::ROWS);
        assert!(out.lines().next().unwrap().contains("AC"));
        assert!(out.contains('÷'));
    }
}
