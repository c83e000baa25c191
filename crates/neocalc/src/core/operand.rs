//! Tagged operand values
//!
//! Operand slots hold whatever the display showed when they were captured.
//! Reading them as numbers goes through one of two explicit conversions,
//! [`Operand::parse_float`] and [`Operand::coerce`], which differ exactly the
//! way a browser's `parseFloat(s)` and `Number(s)` differ.

use serde::Serialize;

/// A stored operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Operand {
    /// Numeral text as shown on the display, e.g. `"12.5"` or `"1.23e+9"`
    Number(String),
    /// The arithmetic-fault marker took this slot
    ErrorMarker,
    /// An empty display buffer
    Empty,
}

impl Operand {
    /// Creates a numeral operand
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Captures the display buffer as an operand
    #[must_use]
    pub fn from_display(text: &str, error_marker: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else if text == error_marker {
            Self::ErrorMarker
        } else {
            Self::Number(text.to_string())
        }
    }

    /// Numeral text, if this operand has one
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Number(text) => Some(text),
            Self::ErrorMarker | Self::Empty => None,
        }
    }

    /// True for [`Operand::ErrorMarker`]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::ErrorMarker)
    }

    /// Parsed-float reading: the longest numeric prefix of the text.
    ///
    /// Empty text and the error marker read as NaN.
    #[must_use]
    pub fn parse_float(&self) -> f64 {
        match self {
            Self::Number(text) => parse_float(text),
            Self::ErrorMarker | Self::Empty => f64::NAN,
        }
    }

    /// Implicit-coercion reading: the whole text must be a numeral.
    ///
    /// Empty text reads as 0, the error marker as NaN.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        match self {
            Self::Number(text) => coerce(text),
            Self::Empty => 0.0,
            Self::ErrorMarker => f64::NAN,
        }
    }
}

const INFINITY: &str = "Infinity";

/// Splits an optional leading sign off `s`
fn split_sign(s: &str) -> (f64, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, s)
    }
}

/// Byte length of the longest unsigned decimal literal at the start of `s`
///
/// Grammar: `digits [ "." digits ] [ exponent ]` or `"." digits [ exponent ]`,
/// where the exponent only counts if at least one digit follows it.
fn decimal_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut mantissa_digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut fraction_digits = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            fraction_digits += 1;
        }
        if mantissa_digits + fraction_digits > 0 {
            i = j;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > start {
            i = j;
        }
    }
    i
}

/// `parseFloat` semantics on a numeral string
pub(crate) fn parse_float(text: &str) -> f64 {
    let (sign, rest) = split_sign(text.trim_start());
    if rest.starts_with(INFINITY) {
        return sign * f64::INFINITY;
    }
    let len = decimal_prefix_len(rest);
    if len == 0 {
        return f64::NAN;
    }
    rest[..len].parse::<f64>().map_or(f64::NAN, |v| sign * v)
}

/// `Number(text)` semantics on a numeral string
pub(crate) fn coerce(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let (sign, rest) = split_sign(trimmed);
    if rest == INFINITY {
        return sign * f64::INFINITY;
    }
    if decimal_prefix_len(rest) != rest.len() {
        return f64::NAN;
    }
    rest.parse::<f64>().map_or(f64::NAN, |v| sign * v)
}
