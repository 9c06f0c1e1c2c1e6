//! Greatest common divisors and narrowing of wide intermediates.
//!
//! Products of two `i64` terms always fit in `i128`, so arithmetic is carried
//! out wide and narrowed back here. Narrowing keeps the unreduced terms when
//! they fit and only falls back to lowest terms when they do not.

use crate::error::{RationalError, Result};

/// Euclid's algorithm on magnitudes. `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Euclid's algorithm on 128-bit magnitudes. `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of two signed integers, as a magnitude.
///
/// `gcd(0, d) == |d|` and `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Divides `(num, den)` by their gcd. A zero gcd divides by one.
///
/// `den` must be positive. The gcd divides `den`, so it is at most
/// `i64::MAX` and the conversion back to `i64` cannot fail.
pub(crate) fn lowest_terms(num: i64, den: i64) -> (i64, i64) {
    debug_assert!(den > 0, "denominator must be positive");
    match i64::try_from(gcd(num, den)) {
        Ok(0) => (num, den),
        Ok(g) => (num / g, den / g),
        Err(_) => unreachable!("gcd is bounded by the positive denominator"),
    }
}

/// Narrows a wide `(num, den)` pair to `i64` storage with a positive
/// denominator.
///
/// `den` must be non-zero. `what` names the operation for the overflow error.
pub(crate) fn narrow(num: i128, den: i128, what: &'static str) -> Result<(i64, i64)> {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };

    if let (Ok(n), Ok(d)) = (i64::try_from(num), i64::try_from(den)) {
        return Ok((n, d));
    }

    let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
    tracing::trace!(%num, %den, gcd = %g, what, "reducing wide intermediate to fit");

    let g = i128::try_from(g).map_err(|_| RationalError::Overflow(what))?;
    match (i64::try_from(num / g), i64::try_from(den / g)) {
        (Ok(n), Ok(d)) => Ok((n, d)),
        _ => Err(RationalError::Overflow(what)),
    }
}
