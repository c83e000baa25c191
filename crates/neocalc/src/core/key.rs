//! Key token classifier
//!
//! The sole admission filter between raw key identifiers (as produced by a
//! keyboard event's `key` or a keypad button's `data-key`) and the engine.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::operations::Operator;

/// Raised when a token is not one of the calculator's keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Token is outside the admitted key set
    #[error("unrecognized key: {0:?}")]
    Unrecognized(String),
}

/// How the engine interprets a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// `+ - * / = Delete`
    Operator,
    /// Digits, `.` and `Backspace`
    Operand,
}

/// A classified calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit (0-9)
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Remove the last typed character
    Backspace,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the pending pair (`=` or `Enter`)
    Equals,
    /// Full reset
    Delete,
}

impl Key {
    /// All keys in keypad order
    pub const ALL: [Key; 18] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Backspace,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Equals,
        Key::Delete,
    ];

    /// Classifies a raw token.
    ///
    /// `Enter` is normalized to [`Key::Equals`]. Digits must be a single
    /// ASCII character.
    pub fn parse(token: &str) -> Result<Self, KeyError> {
        let key = match token {
            "." => Self::Decimal,
            "Backspace" => Self::Backspace,
            "=" | "Enter" => Self::Equals,
            "Delete" => Self::Delete,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    (Some(c), None) => Operator::from_char(c)
                        .map(Self::Operator)
                        .ok_or_else(|| KeyError::Unrecognized(token.to_string()))?,
                    _ => return Err(KeyError::Unrecognized(token.to_string())),
                }
            }
        };
        Ok(key)
    }

    /// Returns which half of the state machine handles this key
    #[must_use]
    pub const fn class(&self) -> KeyClass {
        match self {
            Self::Operator(_) | Self::Equals | Self::Delete => KeyClass::Operator,
            Self::Digit(_) | Self::Decimal | Self::Backspace => KeyClass::Operand,
        }
    }

    /// Canonical token for this key, matching a keypad button's `data-key`
    #[must_use]
    pub const fn token(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) if (*d as usize) < DIGITS.len() => DIGITS[*d as usize],
            Self::Digit(_) => "?",
            Self::Decimal => ".",
            Self::Backspace => "Backspace",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Delete => "Delete",
        }
    }

    /// Label shown on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Backspace => "⌫",
            Self::Delete => "AC",
            Self::Operator(Operator::Multiply) => "×",
            Self::Operator(Operator::Divide) => "÷",
            _ => self.token(),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// True when `token` would be admitted by [`Key::parse`]
#[must_use]
pub fn is_recognized(token: &str) -> bool {
    Key::parse(token).is_ok()
}
