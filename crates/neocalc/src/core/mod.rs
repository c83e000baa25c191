//! Core calculator logic with no rendering dependencies
//!
//! - [`key`]: the token vocabulary and its operator/operand classes
//! - [`operand`]: tagged operand values and their two numeric readings
//! - [`operations`]: the four binary operators
//! - [`engine`]: the keystroke state machine
//! - [`format`]: result fitting for the fixed-width screen
//! - [`display`]: the screen text buffer

pub mod display;
pub mod engine;
pub mod format;
pub mod key;
pub mod operand;
pub mod operations;

pub use display::DisplayBuffer;
pub use engine::{Engine, Flags, Rejection, State, Transition};
pub use format::format_result;
pub use key::{is_recognized, Key, KeyClass, KeyError};
pub use operand::Operand;
pub use operations::{Arithmetic, ArithmeticFault, Operator};
