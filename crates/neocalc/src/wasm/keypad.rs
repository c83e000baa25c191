//! Keypad layout
//!
//! ```text
//! [ AC ] [ ⌫ ] [ ÷ ] [ × ]
//! [ 7  ] [ 8 ] [ 9 ] [ - ]
//! [ 4  ] [ 5 ] [ 6 ] [ + ]
//! [ 1  ] [ 2 ] [ 3 ] [ = ]
//! [ 0  ] [ . ]
//! ```

use super::dom::{DomElement, DATA_KEY, KEY_CLASS};
use crate::core::{Key, Operator};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The key this button sends
    pub key: Key,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        let id = match key {
            Key::Digit(d) => format!("key-{d}"),
            Key::Decimal => "key-decimal".to_string(),
            Key::Operator(op) => format!("key-{}", op_name(op)),
            Key::Equals => "key-equals".to_string(),
            Key::Backspace => "key-backspace".to_string(),
            Key::Delete => "key-delete".to_string(),
        };
        Self { key, id, row, col }
    }

    /// Renders the button as a `.key` element carrying its `data-key`
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_class(KEY_CLASS)
            .with_attr(DATA_KEY, self.key.token())
            .with_text(self.key.label())
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Number of grid columns
    pub const COLS: usize = 4;
    /// Number of grid rows
    pub const ROWS: usize = 5;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let rows: [&[Key]; Self::ROWS] = [
            &[
                Key::Delete,
                Key::Backspace,
                Key::Operator(Operator::Divide),
                Key::Operator(Operator::Multiply),
            ],
            &[
                Key::Digit(7),
                Key::Digit(8),
                Key::Digit(9),
                Key::Operator(Operator::Subtract),
            ],
            &[
                Key::Digit(4),
                Key::Digit(5),
                Key::Digit(6),
                Key::Operator(Operator::Add),
            ],
            &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Equals],
            &[Key::Digit(0), Key::Decimal],
        ];

        let buttons = rows
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButtonDef::new(*key, row, col))
            })
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.key == key)
    }
}
