//! # fract-rational
//!
//! Exact rational arithmetic over native 64-bit integers.
//!
//! This crate provides:
//! - The `Rational` value type with a sign-normalized, positive denominator
//! - Checked arithmetic (`checked_add`, `checked_div`, ...) returning
//!   `RationalError`, and std operators that panic like integer operators
//! - Canonical (`Display`) and mixed-number (`Mixed`) rendering
//! - Classification predicates: zero, integer, proper, unit, adjacent
//! - `Operand` for hosts that pass loosely typed values
//!
//! ## Representation Notes
//!
//! - Values are not stored in lowest terms; `reduce` normalizes on request
//! - Equality, ordering and hashing follow the value, so `2/4 == 1/2`
//! - Intermediates are computed in `i128`; results that do not fit are
//!   reduced before being rejected with `RationalError::Overflow`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod gcd;
pub mod mixed;
pub mod operand;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{ErrorKind, RationalError, Result};
pub use mixed::Mixed;
pub use operand::{BinaryOp, Operand, Outcome};
pub use rational::Rational;
