//! Mixed-number rendering: a whole part plus a proper fraction.

use std::fmt;

use crate::Rational;

/// Display adapter that renders a rational as a mixed number.
///
/// The whole part is the floor of the value and the fractional part is the
/// non-negative remainder, so `-7/4` renders as `-2 1/4`.
#[derive(Clone, Copy, Debug)]
pub struct Mixed(Rational);

impl Rational {
    /// Returns a display adapter for the mixed-number form.
    #[must_use]
    pub fn mixed(&self) -> Mixed {
        Mixed(self.reduced())
    }

    /// Renders the value as a mixed number, e.g. `7/4` as `"1 3/4"`.
    ///
    /// Proper fractions render exactly like [`Display`](fmt::Display).
    #[must_use]
    pub fn as_mixed(&self) -> String {
        self.mixed().to_string()
    }
}

impl fmt::Display for Mixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        if r.is_proper() {
            return write!(f, "{r}");
        }

        let (num, den) = (r.numerator(), r.denominator());
        let whole = num.div_euclid(den);
        let rest = num.rem_euclid(den);
        if rest == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole} {rest}/{den}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_as_mixed() {
        assert_eq!(q(4, 1).as_mixed(), "4");
        assert_eq!(q(-4, 4).as_mixed(), "-1");
        assert_eq!(q(6, 4).as_mixed(), "1 1/2");
        assert_eq!(q(7, 4).as_mixed(), "1 3/4");
    }

    #[test]
    fn test_proper_matches_display() {
        assert_eq!(q(2, 4).as_mixed(), "1/2");
        assert_eq!(q(-3, 9).as_mixed(), "-1/3");
        assert_eq!(q(0, 3).as_mixed(), "0");
    }

    #[test]
    fn test_negative_uses_floor() {
        assert_eq!(q(-7, 4).as_mixed(), "-2 1/4");
        assert_eq!(q(-8, 2).as_mixed(), "-4");
    }

    #[test]
    fn test_adapter_in_format() {
        let r = q(10, 4);
        assert_eq!(format!("[{}]", r.mixed()), "[2 1/2]");
        assert_eq!(r.denominator(), 4);
    }
}
