//! Loosely typed operands for hosts that hand over untyped values.
//!
//! The typed API cannot be called with a float or a string. Interpreters and
//! other embedders that hold values of mixed type go through [`Operand`]
//! instead, and get [`RationalError::TypeMismatch`] for anything that is not
//! an integer (construction) or a rational (binary operations).

use std::fmt;

use crate::error::{RationalError, Result};
use crate::Rational;

/// A dynamically typed value offered to a rational operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A machine integer.
    Int(i64),
    /// A floating-point number. Never coerced.
    Float(f64),
    /// A string. Never parsed.
    Text(String),
    /// A rational number.
    Rational(Rational),
}

impl Operand {
    /// Returns a short name for the operand's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Text(_) => "text",
            Operand::Rational(_) => "rational",
        }
    }

    fn as_rational(&self) -> Result<&Rational> {
        match self {
            Operand::Rational(r) => Ok(r),
            other => Err(RationalError::TypeMismatch {
                expected: RationalError::NOT_RATIONAL,
                found: other.type_name(),
            }),
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Float(x)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Rational> for Operand {
    fn from(r: Rational) -> Self {
        Operand::Rational(r)
    }
}

/// Binary operations reachable through [`Rational::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `self + other`
    Add,
    /// `self - other`
    Sub,
    /// `self * other`
    Mul,
    /// `self / other`
    Div,
    /// `self == other`
    Eq,
    /// `self < other`
    Lt,
    /// `self > other`
    Gt,
    /// `self.is_adjacent_to(other)`
    Adjacent,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Adjacent => "~",
        };
        f.write_str(symbol)
    }
}

/// The result of a dynamically dispatched operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An arithmetic result.
    Value(Rational),
    /// A comparison or predicate result.
    Bool(bool),
}

impl Rational {
    /// Builds a rational from loosely typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::TypeMismatch`] unless both operands are
    /// integers, then behaves like [`Rational::new`].
    pub fn from_operands(numerator: &Operand, denominator: &Operand) -> Result<Self> {
        match (numerator, denominator) {
            (Operand::Int(n), Operand::Int(d)) => Self::new(*n, *d),
            (Operand::Int(_), rejected) | (rejected, _) => Err(RationalError::TypeMismatch {
                expected: RationalError::NOT_INTEGERS,
                found: rejected.type_name(),
            }),
        }
    }

    /// Applies `op` with `other` as the right-hand operand.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::TypeMismatch`] if `other` is not a rational,
    /// and otherwise whatever the underlying checked operation returns.
    pub fn apply(&self, op: BinaryOp, other: &Operand) -> Result<Outcome> {
        let rhs = other.as_rational()?;
        let outcome = match op {
            BinaryOp::Add => Outcome::Value(self.checked_add(rhs)?),
            BinaryOp::Sub => Outcome::Value(self.checked_sub(rhs)?),
            BinaryOp::Mul => Outcome::Value(self.checked_mul(rhs)?),
            BinaryOp::Div => Outcome::Value(self.checked_div(rhs)?),
            BinaryOp::Eq => Outcome::Bool(self == rhs),
            BinaryOp::Lt => Outcome::Bool(self < rhs),
            BinaryOp::Gt => Outcome::Bool(self > rhs),
            BinaryOp::Adjacent => Outcome::Bool(self.is_adjacent_to(rhs)),
        };
        Ok(outcome)
    }
}
