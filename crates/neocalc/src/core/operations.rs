//! Arithmetic on stored operands
//!
//! Addition reads both operands with parsed-float semantics; the other
//! operators use implicit numeric coercion. The two paths only disagree for
//! an empty buffer, but they are kept separate and tested as such.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::operand::Operand;

/// Type-safe pending operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the operator symbol, which is also its key token
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Maps an operator character to an operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Arithmetic fault raised by evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticFault {
    /// Division by zero, 0/0 or a quotient that overflowed
    #[error("division produced a non-finite value ({dividend} / {divisor})")]
    NonFiniteQuotient {
        /// Left operand as a number
        dividend: f64,
        /// Right operand as a number
        divisor: f64,
    },
}

/// Applies operators to stored operand pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Arithmetic {
    /// Applies `op` to the pair `(lhs, rhs)`.
    ///
    /// Only division reports a fault; other operators return whatever IEEE
    /// arithmetic yields, including non-finite values.
    pub fn evaluate(op: Operator, lhs: &Operand, rhs: &Operand) -> Result<f64, ArithmeticFault> {
        match op {
            Operator::Add => Ok(Self::add(lhs, rhs)),
            Operator::Subtract => Ok(Self::subtract(lhs, rhs)),
            Operator::Multiply => Ok(Self::multiply(lhs, rhs)),
            Operator::Divide => Self::divide(lhs, rhs),
        }
    }

    /// Addition on parsed floats: `parse_float(a) + parse_float(b)`
    #[must_use]
    pub fn add(lhs: &Operand, rhs: &Operand) -> f64 {
        lhs.parse_float() + rhs.parse_float()
    }

    /// Subtraction on coerced numbers
    #[must_use]
    pub fn subtract(lhs: &Operand, rhs: &Operand) -> f64 {
        lhs.coerce() - rhs.coerce()
    }

    /// Multiplication on coerced numbers
    #[must_use]
    pub fn multiply(lhs: &Operand, rhs: &Operand) -> f64 {
        lhs.coerce() * rhs.coerce()
    }

    /// Division on coerced numbers; non-finite quotients are faults
    pub fn divide(lhs: &Operand, rhs: &Operand) -> Result<f64, ArithmeticFault> {
        let dividend = lhs.coerce();
        let divisor = rhs.coerce();
        let quotient = dividend / divisor;
        if quotient.is_finite() {
            Ok(quotient)
        } else {
            Err(ArithmeticFault::NonFiniteQuotient { dividend, divisor })
        }
    }
}
