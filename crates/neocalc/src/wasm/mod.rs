//! Web front end
//!
//! The keypad widget against a mock document (always available, so the
//! widget wiring is testable natively) and the real browser bindings behind
//! the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WasmCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, ACTIVE_CLASS, DATA_KEY, KEY_CLASS, PRESS_TRANSITION,
    SCREEN_CLASS, SCREEN_ID,
};
pub use driver::{InputMode, WasmDriver};
pub use keypad::{KeypadButtonDef, WasmKeypad};
