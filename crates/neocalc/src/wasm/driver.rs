//! Keypad widget driver
//!
//! Runs the unified specifications through the mock document, either by
//! keyboard (`keydown` on the window) or by pointer (clicks on `.key`
//! buttons).

use super::calculator::WasmCalculator;
use super::dom::MockDom;
use crate::core::{Key, KeyError, Rejection, State, Transition};
use crate::driver::CalculatorDriver;

/// How the driver delivers keys to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// `keydown` events carrying the token
    #[default]
    Keyboard,
    /// Clicks on the button whose `data-key` matches the token
    Pointer,
}

/// Driver wrapping the keypad widget
#[derive(Debug, Clone, Default)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    mode: InputMode,
}

impl WasmDriver {
    /// Creates a driver with the given input mode
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        Self {
            calculator: WasmCalculator::new(),
            mode,
        }
    }

    /// Creates a keyboard driver
    #[must_use]
    pub fn keyboard() -> Self {
        Self::new(InputMode::Keyboard)
    }

    /// Creates a pointer driver
    #[must_use]
    pub fn pointer() -> Self {
        Self::new(InputMode::Pointer)
    }

    /// Creates a driver around an existing widget
    #[must_use]
    pub const fn with_calculator(calculator: WasmCalculator, mode: InputMode) -> Self {
        Self { calculator, mode }
    }

    /// Input mode
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns a reference to the widget
    #[must_use]
    pub const fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a mutable reference to the widget
    pub fn calculator_mut(&mut self) -> &mut WasmCalculator {
        &mut self.calculator
    }

    /// Returns a reference to the document
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        self.calculator.dom()
    }

    fn unrecognized(token: &str) -> Rejection {
        KeyError::Unrecognized(token.to_string()).into()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: &str) -> Result<Transition, Rejection> {
        match self.mode {
            InputMode::Keyboard => self
                .calculator
                .key_down(token)
                .unwrap_or_else(|| Err(Self::unrecognized(token))),
            InputMode::Pointer => {
                // Enter has no button; the = button stands in for it
                let key = Key::parse(token)?;
                let id = self
                    .dom()
                    .key_button(key.token())
                    .map(|button| button.id.clone())
                    .ok_or_else(|| Self::unrecognized(token))?;
                self.calculator
                    .click(&id)
                    .unwrap_or_else(|| Err(Self::unrecognized(token)))
            }
        }
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn state(&self) -> State {
        self.calculator.engine().state()
    }

    fn clear(&mut self) {
        let _ = self.press(Key::Delete.token());
    }
}
