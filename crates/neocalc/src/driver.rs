//! Unified calculator driver
//!
//! Behaviour is written once against [`CalculatorDriver`] and run against
//! every front end: the plain [`Calculator`] facade and the keypad widget
//! (keyboard and pointer paths alike).

use crate::calculator::Calculator;
use crate::config::DisplayConfig;
use crate::core::{Rejection, State, Transition};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use neocalc::prelude::*;
///
/// fn sums_correctly<D: CalculatorDriver>(driver: &mut D) {
///     assert_eq!(driver.press_all(&["2", "+", "3", "="]), "5");
/// }
///
/// sums_correctly(&mut Calculator::new());
/// sums_correctly(&mut WasmDriver::keyboard());
/// ```
pub trait CalculatorDriver {
    /// Sends one key token
    fn press(&mut self, token: &str) -> Result<Transition, Rejection>;

    /// Current display text
    fn display(&self) -> String;

    /// Current engine state
    fn state(&self) -> State;

    /// Returns the calculator to its initial state
    fn clear(&mut self);

    /// Sends several tokens, ignoring rejections, and returns the display
    fn press_all(&mut self, tokens: &[&str]) -> String {
        for token in tokens {
            let _ = self.press(token);
        }
        self.display()
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, token: &str) -> Result<Transition, Rejection> {
        self.try_process(token)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn state(&self) -> State {
        Self::state(self)
    }

    fn clear(&mut self) {
        self.reset();
    }
}

/// Clears, then types a whitespace-separated key sequence
fn run<D: CalculatorDriver>(driver: &mut D, sequence: &str) -> String {
    driver.clear();
    let tokens: Vec<&str> = sequence.split_whitespace().collect();
    driver.press_all(&tokens)
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation and assume the
// default 8-character screen.

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, "2 + 3 ="), "5");
    assert_eq!(run(driver, "1 0 - 4 ="), "6");
    assert_eq!(run(driver, "6 * 7 ="), "42");
    assert_eq!(run(driver, "2 0 / 4 ="), "5");
    assert_eq!(run(driver, "3 - 1 0 ="), "-7");
    assert_eq!(run(driver, "1 . 5 + 2 . 2 5 ="), "3.75");
    assert_eq!(driver.state(), State::ResultDisplayed);
}

/// Verifies immediate left-to-right evaluation and operator replacement
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    // 5 + 3 is evaluated when * is pressed
    run(driver, "5 + 3");
    assert_eq!(driver.press("*"), Ok(Transition::Evaluated));
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.press_all(&["2", "="]), "16");

    assert_eq!(run(driver, "2 + 3 = * 4 ="), "20");
    assert_eq!(run(driver, "8 + - 3 ="), "5");
    assert_eq!(run(driver, "1 + 2 + 3 + 4 ="), "10");

    // = with an armed operator and no new operand changes nothing
    run(driver, "9 *");
    assert_eq!(driver.press("="), Err(Rejection::AwaitingOperand));
    assert_eq!(driver.display(), "0");
}

/// Verifies the fault marker and recovery by typing over it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    let marker = DisplayConfig::DEFAULT_ERROR_MARKER;

    assert_eq!(run(driver, "5 / 0 ="), marker);
    assert_eq!(driver.state(), State::Errored);
    assert_eq!(driver.press_all(&["7"]), "7");
    assert_eq!(driver.state(), State::EnteringFirstOperand);

    assert_eq!(run(driver, "0 / 0 ="), marker);
    assert_eq!(driver.press_all(&["4", "+", "4", "="]), "8");

    // chained fault
    assert_eq!(run(driver, "9 / 0 +"), marker);
    assert_eq!(driver.state(), State::Errored);
}

/// Verifies the input caps and editing keys
pub fn verify_display_limits<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, "1 2 3 4 5 6 7 8 9"), "12345678");
    assert_eq!(driver.press("0"), Err(Rejection::DisplayFull { cap: 8 }));

    assert_eq!(run(driver, "1 . 2 . 3"), "1.23");
    assert_eq!(run(driver, "1 2 3 4 5 6 7 ."), "1234567");
    assert_eq!(run(driver, "."), "0.");
    assert_eq!(run(driver, "0 5"), "05");

    assert_eq!(run(driver, "1 2 Backspace"), "1");
    assert_eq!(run(driver, "1 Backspace"), "0");
    assert_eq!(driver.state(), State::Idle);
}

/// Verifies fitting results to the screen
pub fn verify_result_formatting<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, "9 9 9 9 9 9 9 9 + 1 ="), "1.00e+8");
    assert_eq!(run(driver, "1 / 3 ="), "0.3333333");
    assert_eq!(run(driver, "0 . 1 + 0 . 2 ="), "0.3");
    assert_eq!(run(driver, "1 / 8 ="), "0.125");
    assert_eq!(run(driver, "1 / 1 2 ="), "0.083333");
    assert_eq!(run(driver, "1 / 1 0 0 0 0 0 0 ="), "1.00e-6");
    assert_eq!(run(driver, "0 - 9 9 9 9 9 9 9 9 - 9 9 ="), "-1.00e+8");
}

/// Verifies that `Delete` restores the initial state from anywhere
pub fn verify_reset<D: CalculatorDriver>(driver: &mut D) {
    for sequence in ["", "4 2", "4 2 +", "4 2 + 1", "4 2 + 1 =", "4 / 0 =", "4 + Backspace"] {
        run(driver, sequence);
        assert_eq!(driver.press("Delete"), Ok(Transition::Cleared));
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.state(), State::Idle);
        // no stale operand survives
        assert_eq!(driver.press_all(&["2", "+", "2", "="]), "4");
    }
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_error_recovery(driver);
    verify_display_limits(driver);
    verify_result_formatting(driver);
    verify_reset(driver);
}
