//! NeoCalc - keystroke-driven calculator engine
//!
//! An eight-character desk calculator driven one key at a time. Keys are
//! tokens as a browser reports them (`"7"`, `"."`, `"+"`, `"Enter"`,
//! `"Backspace"`, `"Delete"`); the engine answers with the text the screen
//! should show.
//!
//! Arithmetic is immediate: `5 + 3 * 2 =` evaluates `5 + 3` when `*` is
//! pressed and shows `16`. Results are fitted to the screen, switching to
//! `d.dde±x` notation when they are too large or too small, and a faulting
//! division shows `Syntax Error!!` until the next key.
//!
//! # Example
//!
//! ```rust
//! use neocalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for token in ["1", "2", "+", "3", "0", "="] {
//!     calc.process_token(token);
//! }
//! assert_eq!(calc.display(), "42");
//!
//! // Unknown tokens are ignored
//! assert_eq!(calc.process_token("Shift"), "42");
//!
//! // Type-over: a digit after a result starts a new number
//! assert_eq!(calc.process_token("7"), "7");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod core;
pub mod driver;

/// Web front end - the mock document is always available for testing
pub mod wasm;

pub use calculator::Calculator;
pub use config::{ConfigError, DisplayConfig};
pub use self::core::{Key, Rejection, State, Transition};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::config::{ConfigError, DisplayConfig};
    pub use crate::core::{
        format_result, is_recognized, DisplayBuffer, Engine, Flags, Key, KeyClass, KeyError,
        Operand, Operator, Rejection, State, Transition,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::{DomElement, DomEvent, InputMode, MockDom, WasmCalculator, WasmDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
