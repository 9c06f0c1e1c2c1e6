//! Exact rational numbers over native integers.
//!
//! A [`Rational`] stores a numerator and a strictly positive denominator.
//! Values are not kept in lowest terms: arithmetic returns the plain
//! textbook terms, and [`Rational::reduce`] normalizes on request.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{RationalError, Result};
use crate::gcd::{gcd_u128, lowest_terms, narrow};

/// An exact rational number with `i64` numerator and denominator.
///
/// The denominator is always positive, so the sign lives in the numerator.
/// Equality, ordering and hashing follow the value, not the stored terms:
/// `2/4 == 1/2`. Use [`Rational::same_terms`] to compare the terms.
#[derive(Clone, Copy)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// The rational 0/1.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// The rational 1/1.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves the sign to the numerator. The terms
    /// are not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidValue`] if the denominator is zero, or
    /// [`RationalError::Overflow`] if moving the sign overflows.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(RationalError::InvalidValue);
        }
        if denominator > 0 {
            return Ok(Self { num: numerator, den: denominator });
        }
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(num), Some(den)) => Ok(Self { num, den }),
            _ => Err(RationalError::Overflow("sign normalization")),
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Builds a rational from wide terms. `den` must be non-zero.
    fn from_wide(num: i128, den: i128, what: &'static str) -> Result<Self> {
        let (num, den) = narrow(num, den, what)?;
        Ok(Self { num, den })
    }

    /// Returns the stored numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Returns the stored denominator. Always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Divides both terms by their greatest common divisor, in place.
    ///
    /// Returns `self` so the reduced value can be used directly.
    pub fn reduce(&mut self) -> &mut Self {
        (self.num, self.den) = lowest_terms(self.num, self.den);
        self
    }

    /// Returns this value in lowest terms, leaving `self` untouched.
    #[must_use]
    pub fn reduced(&self) -> Self {
        let mut r = *self;
        r.reduce();
        r
    }

    /// Returns true if the stored terms are already in lowest terms.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        self.same_terms(&self.reduced())
    }

    /// Compares the stored terms rather than the values.
    ///
    /// `Rational::new(2, 4)` and `Rational::new(1, 2)` are equal but do not
    /// have the same terms.
    #[must_use]
    pub fn same_terms(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Computes `self + other` as `(a·d + b·c) / (b·d)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the result does not fit.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_terms(other);
        Self::from_wide(a * d + b * c, b * d, "addition")
    }

    /// Computes `self - other` as `(a·d − b·c) / (b·d)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the result does not fit.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_terms(other);
        Self::from_wide(a * d - b * c, b * d, "subtraction")
    }

    /// Computes `self * other` as `(a·c) / (b·d)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the result does not fit.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_terms(other);
        Self::from_wide(a * c, b * d, "multiplication")
    }

    /// Computes `self / other` as `(a·d) / (b·c)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `other` is zero, or
    /// [`RationalError::Overflow`] if the result does not fit.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.num == 0 {
            return Err(RationalError::DivideByZero);
        }
        let (a, b, c, d) = self.wide_terms(other);
        Self::from_wide(a * d, b * c, "division")
    }

    /// Raises the value to an integer power and returns it in lowest terms.
    ///
    /// Both terms are raised independently. A zero exponent yields 1/1 and a
    /// negative exponent raises the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] for a negative power of zero,
    /// or [`RationalError::Overflow`] if a raised term does not fit.
    pub fn checked_pow(&self, exp: i32) -> Result<Self> {
        let base = self.reduced();
        let base = if exp < 0 { base.checked_recip()? } else { base };
        let e = exp.unsigned_abs();

        let raised = base
            .num
            .checked_pow(e)
            .zip(base.den.checked_pow(e))
            .ok_or(RationalError::Overflow("exponentiation"))?;

        let mut result = Self::new(raised.0, raised.1)?;
        Ok(*result.reduce())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the value is zero, or
    /// [`RationalError::Overflow`] if the reciprocal does not fit.
    pub fn checked_recip(&self) -> Result<Self> {
        if self.num == 0 {
            return Err(RationalError::DivideByZero);
        }
        Self::from_wide(i128::from(self.den), i128::from(self.num), "reciprocal")
    }

    /// Returns the absolute value. The denominator is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] for a numerator of `i64::MIN`.
    pub fn checked_abs(&self) -> Result<Self> {
        let num = self
            .num
            .checked_abs()
            .ok_or(RationalError::Overflow("absolute value"))?;
        Ok(Self { num, den: self.den })
    }

    /// Returns the negation.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] for a numerator of `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        let num = self
            .num
            .checked_neg()
            .ok_or(RationalError::Overflow("negation"))?;
        Ok(Self { num, den: self.den })
    }

    /// Raises to an integer power; see [`Rational::checked_pow`].
    ///
    /// # Panics
    ///
    /// Panics if [`Rational::checked_pow`] fails.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        expect_op(self.checked_pow(exp))
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        expect_op(self.checked_recip())
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    #[must_use]
    pub fn abs(&self) -> Self {
        expect_op(self.checked_abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.num.cmp(&0) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Returns true if positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Returns true if the value is a whole number, e.g. 8/4 or 3.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.num.rem_euclid(self.den) == 0
    }

    /// Returns true if the absolute value is less than one.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.num.unsigned_abs() < self.den.unsigned_abs()
    }

    /// Returns true if the numerator is exactly 1 in lowest terms.
    ///
    /// Negative values are never unit fractions: `-1/2` is not a unit.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.reduced().num == 1
    }

    /// Returns true if `|self - other|` is a unit fraction.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        // The difference is taken wide so that no pair of values can overflow.
        let (a, b, c, d) = self.wide_terms(other);
        let num = (a * d - b * c).unsigned_abs();
        let den = (b * d).unsigned_abs();
        num != 0 && gcd_u128(num, den) == num
    }

    /// Returns the value as a floating-point approximation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn wide_terms(&self, other: &Self) -> (i128, i128, i128, i128) {
        (
            i128::from(self.num),
            i128::from(self.den),
            i128::from(other.num),
            i128::from(other.den),
        )
    }

    /// Cross-multiplies `a·d` against `c·b`.
    ///
    /// Denominators are positive, so no sign correction is needed.
    fn cross(&self, other: &Self) -> (i128, i128) {
        let (a, b, c, d) = self.wide_terms(other);
        (a * d, c * b)
    }
}

/// Unwraps an operator result the way integer operators panic.
fn expect_op(result: Result<Rational>) -> Rational {
    match result {
        Ok(r) => r,
        Err(e) => panic!("rational arithmetic failed: {e}"),
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.reduced();
        r.num.hash(state);
        r.den.hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reduced();
        if r.den == 1 {
            write!(f, "{}", r.num)
        } else {
            write!(f, "{}/{}", r.num, r.den)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_add(&rhs))
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Self::Output {
        expect_op(self.checked_add(rhs))
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_sub(&rhs))
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Self::Output {
        expect_op(self.checked_sub(rhs))
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_mul(&rhs))
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Self::Output {
        expect_op(self.checked_mul(rhs))
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_div(&rhs))
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Self::Output {
        expect_op(self.checked_div(rhs))
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        expect_op(self.checked_neg())
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        expect_op(self.checked_neg())
    }
}

// Running totals are kept in lowest terms so denominators stay small.
impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| (acc + x).reduced())
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| (acc * x).reduced())
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<Rational> for f64 {
    fn from(r: Rational) -> Self {
        r.to_f64()
    }
}
