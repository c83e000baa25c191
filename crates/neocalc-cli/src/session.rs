//! Keystroke sessions: a calculator plus a record of every press

use neocalc::core::is_recognized;
use neocalc::{Calculator, DisplayConfig, State, Transition};
use serde::Serialize;

use crate::error::CliResult;

/// Outcome of a single key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Token as pressed
    pub token: String,
    /// What the engine did, if it accepted the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    /// Why the engine absorbed the key, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    /// Display after the press
    pub display: String,
    /// Engine state after the press
    pub state: State,
}

impl Step {
    /// True when the key changed nothing
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.transition.is_none()
    }
}

/// Splits a command-line word into key tokens.
///
/// Recognized tokens pass through. A word built only from single-character
/// keys (`12+3=`) is split into its characters. Anything else is kept whole
/// so the engine reports it as an unknown key.
#[must_use]
pub fn expand_word(word: &str) -> Vec<String> {
    if is_recognized(word) {
        return vec![word.to_string()];
    }
    let mut buf = [0u8; 4];
    let splittable = !word.is_empty()
        && word
            .chars()
            .all(|c| is_recognized(c.encode_utf8(&mut buf)));
    if splittable {
        word.chars().map(String::from).collect()
    } else {
        vec![word.to_string()]
    }
}

/// A calculator that records each press
#[derive(Debug, Clone, Default)]
pub struct Session {
    calculator: Calculator,
    steps: Vec<Step>,
}

impl Session {
    /// Session on the default eight-character screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session on a custom screen
    pub fn with_config(config: DisplayConfig) -> CliResult<Self> {
        Ok(Self {
            calculator: Calculator::with_config(config)?,
            steps: Vec::new(),
        })
    }

    /// Presses one token and records the outcome
    pub fn step(&mut self, token: &str) -> &Step {
        let outcome = self.calculator.try_process(token);
        let (transition, rejected) = match outcome {
            Ok(transition) => (Some(transition), None),
            Err(rejection) => {
                tracing::info!(token, %rejection, "key rejected");
                (None, Some(rejection.to_string()))
            }
        };
        let index = self.steps.len();
        self.steps.push(Step {
            token: token.to_string(),
            transition,
            rejected,
            display: self.calculator.display().to_string(),
            state: self.calculator.state(),
        });
        &self.steps[index]
    }

    /// Expands and presses every word, returning the final display
    pub fn run<S: AsRef<str>>(&mut self, words: &[S]) -> &str {
        for word in words {
            for token in expand_word(word.as_ref()) {
                self.step(&token);
            }
        }
        self.display()
    }

    /// Current display
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Current engine state
    #[must_use]
    pub fn state(&self) -> State {
        self.calculator.state()
    }

    /// Every press so far
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Underlying calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Clears the recorded steps, keeping the calculator as it is
    pub fn clear_steps(&mut self) {
        self.steps.clear();
    }
}

/// Final result of a `press` run, as printed with `--format json`
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    /// Final display
    pub display: &'a str,
    /// Final engine state
    pub state: State,
    /// Every press, present with `--trace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<&'a [Step]>,
}

impl<'a> Summary<'a> {
    /// Builds the summary of a session
    #[must_use]
    pub fn of(session: &'a Session, with_steps: bool) -> Self {
        Self {
            display: session.display(),
            state: session.state(),
            steps: with_steps.then(|| session.steps()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ===== expand_word tests =====

    #[test]
    fn test_expand_known_tokens() {
        assert_eq!(expand_word("7"), vec!["7"]);
        assert_eq!(expand_word("Enter"), vec!["Enter"]);
        assert_eq!(expand_word("Backspace"), vec!["Backspace"]);
    }

    #[test]
    fn test_expand_compact_expression() {
        assert_eq!(expand_word("12+3="), vec!["1", "2", "+", "3", "="]);
    }

    #[test]
    fn test_expand_keeps_unknown_whole() {
        assert_eq!(expand_word("Shift"), vec!["Shift"]);
        assert_eq!(expand_word("1a"), vec!["1a"]);
        assert_eq!(expand_word(""), vec![""]);
    }

    // ===== Session tests =====

    #[test]
    fn test_run_sum() {
        let mut session = Session::new();
        assert_eq!(session.run(&["12+3", "="]), "15");
        assert_eq!(session.state(), State::ResultDisplayed);
        assert_eq!(session.steps().len(), 5);
    }

    #[test]
    fn test_step_records_rejection() {
        let mut session = Session::new();
        let step = session.step("+").clone();
        assert!(step.is_rejected());
        assert!(step.rejected.is_some());
        assert_eq!(step.display, "0");
        assert_eq!(step.state, State::Idle);
    }

    #[test]
    fn test_step_records_transition() {
        let mut session = Session::new();
        let step = session.step("5").clone();
        assert_eq!(step.transition, Some(Transition::Edited));
        assert_eq!(step.display, "5");
        assert!(step.rejected.is_none());
    }

    #[test]
    fn test_unknown_word_is_absorbed() {
        let mut session = Session::new();
        session.run(&["4", "Shift", "2"]);
        assert_eq!(session.display(), "42");
        assert!(session.steps()[1].is_rejected());
    }

    #[test]
    fn test_with_config() {
        let config = DisplayConfig::new().with_error_marker("E");
        let mut session = Session::with_config(config).unwrap();
        assert_eq!(session.run(&["1/0="]), "E");
        assert_eq!(session.state(), State::Errored);
    }

    #[test]
    fn test_with_invalid_config() {
        assert!(Session::with_config(DisplayConfig::new().with_width(2)).is_err());
    }

    #[test]
    fn test_clear_steps() {
        let mut session = Session::new();
        session.run(&["9"]);
        session.clear_steps();
        assert!(session.steps().is_empty());
        assert_eq!(session.display(), "9");
    }

    #[test]
    fn test_summary_json() {
        let mut session = Session::new();
        session.run(&["2*4="]);
        let json = serde_json::to_value(Summary::of(&session, false)).unwrap();
        assert_eq!(json["display"], "8");
        assert_eq!(json["state"], "ResultDisplayed");
        assert!(json.get("steps").is_none());

        let json = serde_json::to_value(Summary::of(&session, true)).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 4);
        assert_eq!(json["steps"][3]["transition"], "Evaluated");
    }
}
