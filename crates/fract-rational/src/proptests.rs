//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // Construction invariants

        #[test]
        fn construct_normalizes_sign(n in any::<i32>(), d in non_zero_int()) {
            let n = i64::from(n);
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator() > 0);
            if d < 0 {
                prop_assert_eq!((r.numerator(), r.denominator()), (-n, -d));
            } else {
                prop_assert_eq!((r.numerator(), r.denominator()), (n, d));
            }
        }

        #[test]
        fn construct_zero_denominator_fails(n in any::<i64>()) {
            prop_assert_eq!(Rational::new(n, 0).unwrap_err(), RationalError::InvalidValue);
        }

        // Reduction

        #[test]
        fn reduce_idempotent(a in rational()) {
            let once = a.reduced();
            let twice = once.reduced();
            prop_assert!(once.same_terms(&twice));
            prop_assert_eq!(once, a);
        }

        #[test]
        fn reduce_keeps_denominator_positive(a in rational()) {
            prop_assert!(a.reduced().denominator() > 0);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_sub_inverts_add(a in rational(), b in rational()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn rational_div_inverts_mul(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            use num_traits::One;
            prop_assert!((a * a.recip()).is_one());
        }

        #[test]
        fn rational_div_by_zero(a in rational(), d in non_zero_int()) {
            let zero = Rational::new(0, d).unwrap();
            prop_assert_eq!(a.checked_div(&zero), Err(RationalError::DivideByZero));
        }

        // Ordering and equality

        #[test]
        fn ordering_matches_float(a in rational(), b in rational()) {
            if a < b {
                prop_assert!(a.to_f64() < b.to_f64());
            }
            if a > b {
                prop_assert!(a.to_f64() > b.to_f64());
            }
        }

        #[test]
        fn equality_ignores_scaling(a in rational(), k in 1i64..100i64) {
            let scaled = Rational::new(a.numerator() * k, a.denominator() * k).unwrap();
            prop_assert_eq!(scaled, a);
        }

        // Formatting and predicates

        #[test]
        fn display_is_pure(a in rational()) {
            let before = a;
            let _ = a.to_string();
            let _ = a.as_mixed();
            let _ = a.is_unit();
            prop_assert!(before.same_terms(&a));
        }

        #[test]
        fn mixed_parts_recombine(a in rational()) {
            let r = a.reduced();
            let whole = r.numerator().div_euclid(r.denominator());
            let rest = r.numerator().rem_euclid(r.denominator());
            let back = Rational::from(whole) + Rational::new(rest, r.denominator()).unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn adjacent_is_symmetric(a in rational(), b in rational()) {
            prop_assert_eq!(a.is_adjacent_to(&b), b.is_adjacent_to(&a));
            prop_assert_eq!(a.is_adjacent_to(&b), (a - b).abs().is_unit());
        }

        #[test]
        fn pow_is_reduced(a in non_zero_rational(), e in -3i32..=3i32) {
            prop_assert!(a.pow(e).is_reduced());
        }
    }
}
