//! Property-based tests for polynomial multiplication.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::BlockMultiplier;
    use crate::padding::pad_to_power_of_two;
    use crate::{multiply_block_recursive, multiply_direct, PolyError, Polynomial};

    const TOLERANCE: f64 = 1e-6;

    // Strategy for generating small integral coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating polynomials of degree 0-15
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=16)
            .prop_map(|c| Polynomial::from_coefficients(c).unwrap())
    }

    // Strategy for generating two polynomials of the same degree
    fn equal_degree_pair() -> impl Strategy<Value = (Polynomial, Polynomial)> {
        (1usize..=24).prop_flat_map(|len| {
            (
                proptest::collection::vec(small_coeff(), len),
                proptest::collection::vec(small_coeff(), len),
            )
                .prop_map(|(a, b)| {
                    (
                        Polynomial::from_coefficients(a).unwrap(),
                        Polynomial::from_coefficients(b).unwrap(),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn direct_degree_additive(a in small_poly(), b in small_poly()) {
            let product = multiply_direct(&a, &b);
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        }

        #[test]
        fn direct_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(multiply_direct(&a, &b), multiply_direct(&b, &a));
        }

        #[test]
        fn direct_eval_mul(a in small_poly(), b in small_poly(), x in -2i32..=2) {
            // (a * b)(x) = a(x) * b(x)
            let x = f64::from(x);
            let product = multiply_direct(&a, &b);
            let expected = a.eval(x) * b.eval(x);
            prop_assert!((product.eval(x) - expected).abs() <= TOLERANCE * expected.abs().max(1.0));
        }

        #[test]
        fn block_matches_direct((a, b) in equal_degree_pair()) {
            let direct = multiply_direct(&a, &b);
            let block = multiply_block_recursive(&a, &b).unwrap();

            let k = a.num_coefficients();
            prop_assert_eq!(block.degree(), 2 * (k.next_power_of_two() - 1));
            for i in 0..=direct.degree() {
                let d = direct.coefficient_at(i).unwrap();
                let r = block.coefficient_at(i).unwrap();
                prop_assert!((d - r).abs() <= TOLERANCE, "index {}: {} != {}", i, d, r);
            }
            for i in direct.degree() + 1..=block.degree() {
                prop_assert_eq!(block.coefficient_at(i).unwrap(), 0.0);
            }
        }

        #[test]
        fn block_threshold_invariant((a, b) in equal_degree_pair(), threshold in 1usize..=32) {
            let full = multiply_block_recursive(&a, &b).unwrap();
            let cut = a
                .mul_block_recursive_with(&b, &BlockMultiplier::with_threshold(threshold))
                .unwrap();
            prop_assert_eq!(cut.degree(), full.degree());
            prop_assert!(cut.approx_eq(&full, TOLERANCE));
        }

        #[test]
        fn padding_noop_for_powers_of_two(exp in 0u32..6, seed in small_coeff()) {
            let len = 1usize << exp;
            let coeffs = vec![seed; len];
            let padded = pad_to_power_of_two(&coeffs);
            prop_assert!(matches!(padded, std::borrow::Cow::Borrowed(_)));
            prop_assert_eq!(&*padded, coeffs.as_slice());
        }

        #[test]
        fn one_is_identity(a in small_poly()) {
            let one = Polynomial::constant(1.0);
            prop_assert_eq!(multiply_direct(&a, &one), a.clone());
            prop_assert_eq!(multiply_direct(&one, &a), a);
        }

        #[test]
        fn zero_absorbs(a in small_poly()) {
            let zero = Polynomial::constant(0.0);
            let product = multiply_direct(&a, &zero);
            prop_assert_eq!(product.degree(), a.degree());
            prop_assert!(product.is_zero());
        }

        #[test]
        fn block_rejects_unequal_degrees(a in small_poly(), b in small_poly()) {
            prop_assume!(a.degree() != b.degree());
            prop_assert_eq!(
                multiply_block_recursive(&a, &b),
                Err(PolyError::DegreeMismatch { left: a.degree(), right: b.degree() })
            );
        }
    }

    #[test]
    fn block_identity_and_zero_at_degree_zero() {
        let c = Polynomial::constant(-7.5);
        let one = Polynomial::constant(1.0);
        let zero = Polynomial::constant(0.0);

        assert_eq!(multiply_block_recursive(&c, &one).unwrap(), c);
        assert!(multiply_block_recursive(&c, &zero).unwrap().is_zero());
    }

    #[test]
    fn block_rejects_degree_two_and_three() {
        let a = Polynomial::zero(2);
        let b = Polynomial::<f64>::zero(3);
        assert_eq!(
            multiply_block_recursive(&a, &b),
            Err(PolyError::DegreeMismatch { left: 2, right: 3 })
        );
    }
}
