//! Display buffer

use std::fmt;

/// Text currently on the calculator screen.
///
/// Owned by whoever renders the screen and lent to the engine for each
/// key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Text shown on a cleared screen
    pub const ZERO: &'static str = "0";

    /// Creates a buffer showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: Self::ZERO.to_string(),
        }
    }

    /// Creates a buffer with arbitrary text, e.g. re-read from a screen element
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the buffer holds no characters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the buffer contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.text.contains('.')
    }

    /// Replaces the text
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Appends a character
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Removes and returns the last character
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Shows `"0"` again
    pub fn reset(&mut self) {
        self.set(Self::ZERO);
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for DisplayBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
