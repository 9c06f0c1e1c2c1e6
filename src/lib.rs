//! # fract
//!
//! Exact fractions over native integers.
//!
//! ## Features
//!
//! - **Exact Values**: numerator/denominator pairs with a positive denominator
//! - **Checked Arithmetic**: add, subtract, multiply, divide and integer powers
//! - **Rendering**: canonical `n/d` text and mixed numbers such as `1 3/4`
//! - **Classification**: zero, integer, proper, unit and adjacent fractions
//!
//! ## Quick Start
//!
//! ```rust
//! use fract::prelude::*;
//!
//! let a = Rational::new(1, 2)?;
//! let b = Rational::new(1, 3)?;
//! let sum = a.checked_add(&b)?;
//! assert_eq!(sum.to_string(), "5/6");
//! assert!(a.is_adjacent_to(&b));
//! assert_eq!(Rational::new(7, 4)?.as_mixed(), "1 3/4");
//! # Ok::<(), fract::rational::RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fract_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fract_rational::{ErrorKind, Mixed, Rational, RationalError};
    pub use num_traits::{One, Zero};
}
