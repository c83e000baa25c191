//! Calculator engine: the keystroke state machine
//!
//! One key at a time, the engine decides what the display shows and which
//! operand and operator it keeps. There is no operator precedence: choosing
//! a second operator evaluates the pending pair immediately.
//!
//! ```text
//!            digit/.                 + - * /                 =
//!   Idle ──────────────▶ Entering ──────────▶ OperatorArmed ◀──── ResultDisplayed
//!    ▲ ▲                  │   │                    │  ▲   (op replaces, clears result)
//!    │ └── Backspace ─────┘   └── = / chained op ──┼──┴──▶ ResultDisplayed | Errored
//!    │                                             │
//!    └──────── Backspace (de-arms) ────────────────┘
//! ```
//!
//! `Delete` returns every state to a fresh `Idle`; any operand key typed
//! over a result or an error does the same before it is applied.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, DisplayConfig};
use crate::core::display::DisplayBuffer;
use crate::core::format::format_result;
use crate::core::key::{Key, KeyError};
use crate::core::operand::Operand;
use crate::core::operations::{Arithmetic, Operator};

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum State {
    /// Not entering a number and no operator armed
    #[default]
    Idle,
    /// Typing the left operand
    EnteringFirstOperand,
    /// Typing the right operand; the left one is stored
    EnteringSecondOperand,
    /// An operator was just chosen and waits for a new number
    OperatorArmed,
    /// A result is on screen; the next operand key starts over
    ResultDisplayed,
    /// A division faulted; the next operand key starts over
    Errored,
}

impl State {
    /// A number is being typed or edited
    #[must_use]
    pub const fn entering_operand(self) -> bool {
        matches!(self, Self::EnteringFirstOperand | Self::EnteringSecondOperand)
    }

    /// An operator has been set and no new number has been started
    #[must_use]
    pub const fn operator_armed(self) -> bool {
        matches!(
            self,
            Self::OperatorArmed | Self::ResultDisplayed | Self::Errored
        )
    }

    /// The display shows a finalized result
    #[must_use]
    pub const fn result_ready(self) -> bool {
        matches!(self, Self::ResultDisplayed)
    }

    /// The last evaluation faulted
    #[must_use]
    pub const fn errored(self) -> bool {
        matches!(self, Self::Errored)
    }

    /// Boolean view of this state
    #[must_use]
    pub const fn flags(self) -> Flags {
        Flags {
            entering_operand: self.entering_operand(),
            operator_armed: self.operator_armed(),
            result_ready: self.result_ready(),
            errored: self.errored(),
        }
    }
}

/// The four classic calculator flags, derived from [`State`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// A number is being typed
    pub entering_operand: bool,
    /// An operator is armed
    pub operator_armed: bool,
    /// A result is displayed
    pub result_ready: bool,
    /// The last evaluation faulted
    pub errored: bool,
}

/// What an accepted key did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transition {
    /// The number being typed changed (or a new one started)
    Edited,
    /// The display was stored as the left operand and the operator recorded
    OperatorCaptured,
    /// The pending operator was swapped
    OperatorReplaced,
    /// The pending pair was evaluated to a number
    Evaluated,
    /// The pending pair faulted; the error marker is displayed
    Faulted,
    /// Full reset
    Cleared,
}

/// Why a key was absorbed without effect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Token is not a calculator key
    #[error(transparent)]
    UnknownKey(#[from] KeyError),
    /// Operator pressed with no number entered or armed
    #[error("nothing to operate on yet")]
    NothingToOperate,
    /// `=` pressed before any operator was chosen
    #[error("no pending operation to evaluate")]
    NothingToEvaluate,
    /// `=` pressed while an operator waits for its second operand
    #[error("operator armed; waiting for the second operand")]
    AwaitingOperand,
    /// Digit pressed with the display full
    #[error("display is full ({cap} characters)")]
    DisplayFull {
        /// Digit cap
        cap: usize,
    },
    /// Decimal point pressed with no room left for a fractional digit
    #[error("no room for a decimal point ({cap} characters)")]
    DecimalLimit {
        /// Decimal-point cap
        cap: usize,
    },
    /// Second decimal point in one number
    #[error("number already has a decimal point")]
    DuplicateDecimal,
}

/// Operand-class keys, the only ones that edit the number being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Digit(u8),
    Decimal,
    Backspace,
}

/// The calculator state machine
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Engine {
    config: DisplayConfig,
    state: State,
    /// Left operand (`arg1`)
    operand: Option<Operand>,
    pending: Option<Operator>,
}

impl Engine {
    /// Creates an engine for the default 8-character screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine for a custom screen
    pub fn with_config(config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Boolean flag view of the current state
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.state.flags()
    }

    /// Stored left operand
    #[must_use]
    pub const fn operand(&self) -> Option<&Operand> {
        self.operand.as_ref()
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Screen configuration
    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Returns to the freshly constructed state (configuration is kept)
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.operand = None;
        self.pending = None;
    }

    /// Applies one key to the engine and the display it renders to
    pub fn handle(
        &mut self,
        key: Key,
        display: &mut DisplayBuffer,
    ) -> Result<Transition, Rejection> {
        if let Key::Digit(d) = key {
            if d > 9 {
                return Err(KeyError::Unrecognized(d.to_string()).into());
            }
        }

        let before = self.state;
        let outcome = match key {
            Key::Delete => {
                self.reset();
                display.reset();
                Ok(Transition::Cleared)
            }
            Key::Equals => self.press_equals(display),
            Key::Operator(op) => self.press_operator(op, display),
            Key::Digit(d) => self.press_operand(Edit::Digit(d), display),
            Key::Decimal => self.press_operand(Edit::Decimal, display),
            Key::Backspace => self.press_operand(Edit::Backspace, display),
        };

        let screen = display.as_str();
        match &outcome {
            Ok(transition) => debug!(
                %key,
                class = ?key.class(),
                ?before,
                after = ?self.state,
                ?transition,
                %screen,
                "key applied"
            ),
            Err(reason) => debug!(%key, state = ?self.state, %reason, "key ignored"),
        }
        outcome
    }

    fn press_equals(&mut self, display: &mut DisplayBuffer) -> Result<Transition, Rejection> {
        match self.state {
            State::Idle => Err(Rejection::NothingToOperate),
            State::EnteringFirstOperand | State::EnteringSecondOperand => self.evaluate(display),
            State::OperatorArmed | State::ResultDisplayed | State::Errored => {
                Err(Rejection::AwaitingOperand)
            }
        }
    }

    fn press_operator(
        &mut self,
        op: Operator,
        display: &mut DisplayBuffer,
    ) -> Result<Transition, Rejection> {
        match self.state {
            State::Idle => Err(Rejection::NothingToOperate),
            State::EnteringFirstOperand | State::EnteringSecondOperand => {
                if self.operand.is_none() {
                    self.operand = Some(self.capture(display));
                    self.pending = Some(op);
                    display.reset();
                    self.state = State::OperatorArmed;
                    return Ok(Transition::OperatorCaptured);
                }
                // Chained: evaluate the pending pair, then arm the new operator
                let transition = self.evaluate(display)?;
                self.pending = Some(op);
                if self.state == State::ResultDisplayed {
                    self.state = State::OperatorArmed;
                }
                Ok(transition)
            }
            State::OperatorArmed | State::ResultDisplayed => {
                self.pending = Some(op);
                self.state = State::OperatorArmed;
                Ok(Transition::OperatorReplaced)
            }
            State::Errored => {
                self.pending = Some(op);
                Ok(Transition::OperatorReplaced)
            }
        }
    }

    fn press_operand(
        &mut self,
        edit: Edit,
        display: &mut DisplayBuffer,
    ) -> Result<Transition, Rejection> {
        // Type-over: a result or an error on screen is discarded
        if matches!(self.state, State::ResultDisplayed | State::Errored) {
            self.reset();
            display.reset();
        }

        if self.state.entering_operand() {
            return self.edit_number(edit, display);
        }

        display.reset();
        match edit {
            Edit::Decimal => {
                display.push('.');
                self.state = self.entering_state();
            }
            Edit::Digit(d) => {
                display.set(Key::Digit(d).token());
                self.state = self.entering_state();
            }
            Edit::Backspace => self.state = State::Idle,
        }
        Ok(Transition::Edited)
    }

    fn edit_number(
        &mut self,
        edit: Edit,
        display: &mut DisplayBuffer,
    ) -> Result<Transition, Rejection> {
        match edit {
            Edit::Decimal => {
                if display.has_decimal() {
                    return Err(Rejection::DuplicateDecimal);
                }
                let cap = self.config.decimal_cap();
                if display.len() >= cap {
                    return Err(Rejection::DecimalLimit { cap });
                }
                display.push('.');
            }
            Edit::Backspace => {
                display.pop();
                if display.is_empty() {
                    display.reset();
                    self.state = State::Idle;
                }
            }
            Edit::Digit(d) => {
                let cap = self.config.digit_cap();
                if display.len() >= cap {
                    return Err(Rejection::DisplayFull { cap });
                }
                display.push(char::from(b'0' + d));
            }
        }
        Ok(Transition::Edited)
    }

    /// Evaluates `operand <pending> display`, folding the result back into
    /// the left operand.
    fn evaluate(&mut self, display: &mut DisplayBuffer) -> Result<Transition, Rejection> {
        let (Some(lhs), Some(op)) = (self.operand.as_ref(), self.pending) else {
            return Err(Rejection::NothingToEvaluate);
        };
        let rhs = self.capture(display);

        let (result, transition, state) = match Arithmetic::evaluate(op, lhs, &rhs) {
            Ok(value) => {
                let text = format_result(value, &self.config);
                (Operand::Number(text), Transition::Evaluated, State::ResultDisplayed)
            }
            Err(fault) => {
                debug!(%fault, "arithmetic fault");
                (Operand::ErrorMarker, Transition::Faulted, State::Errored)
            }
        };

        match &result {
            Operand::Number(text) => display.set(text),
            Operand::ErrorMarker | Operand::Empty => display.set(&self.config.error_marker),
        }
        self.operand = Some(result);
        self.state = state;
        Ok(transition)
    }

    fn capture(&self, display: &DisplayBuffer) -> Operand {
        Operand::from_display(display.as_str(), &self.config.error_marker)
    }

    const fn entering_state(&self) -> State {
        if self.operand.is_some() {
            State::EnteringSecondOperand
        } else {
            State::EnteringFirstOperand
        }
    }
}
