//! Errors produced by rational construction and arithmetic.

use thiserror::Error;

/// Errors that can occur when building or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// An operand had the wrong type for the requested operation.
    #[error("{expected}, got {found}")]
    TypeMismatch {
        /// What the operation accepts.
        expected: &'static str,
        /// Type name of the rejected operand.
        found: &'static str,
    },

    /// The denominator was zero at construction.
    #[error("denominator cannot be zero")]
    InvalidValue,

    /// The divisor had a zero numerator.
    #[error("cannot divide by zero")]
    DivideByZero,

    /// The result does not fit in 64-bit storage, even in lowest terms.
    #[error("{0} overflows 64-bit storage")]
    Overflow(&'static str),
}

/// Coarse classification of a [`RationalError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`RationalError::TypeMismatch`].
    TypeMismatch,
    /// See [`RationalError::InvalidValue`].
    InvalidValue,
    /// See [`RationalError::DivideByZero`].
    DivideByZero,
    /// See [`RationalError::Overflow`].
    Overflow,
}

impl RationalError {
    /// Message used when constructor arguments are not integers.
    pub(crate) const NOT_INTEGERS: &'static str = "numerator and denominator must be integers";

    /// Message used when a binary operand is not a rational.
    pub(crate) const NOT_RATIONAL: &'static str = "other operand is not a rational";

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidValue => ErrorKind::InvalidValue,
            Self::DivideByZero => ErrorKind::DivideByZero,
            Self::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

/// Result alias for rational operations.
pub type Result<T> = std::result::Result<T, RationalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RationalError::InvalidValue.to_string(), "denominator cannot be zero");
        assert_eq!(RationalError::DivideByZero.to_string(), "cannot divide by zero");
        assert_eq!(
            RationalError::TypeMismatch {
                expected: RationalError::NOT_RATIONAL,
                found: "int",
            }
            .to_string(),
            "other operand is not a rational, got int"
        );
        assert_eq!(
            RationalError::Overflow("multiplication").to_string(),
            "multiplication overflows 64-bit storage"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            RationalError::TypeMismatch {
                expected: RationalError::NOT_INTEGERS,
                found: "float",
            }
            .kind(),
            RationalError::InvalidValue.kind(),
            RationalError::DivideByZero.kind(),
            RationalError::Overflow("addition").kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
