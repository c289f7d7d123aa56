// src/polynomial/proptests.rs
//
// Property-based tests for the sparse polynomial.

use proptest::prelude::*;

use super::polynomial::{Polynomial, Term};

// Small coefficients keep products well inside i64.
fn small_term() -> impl Strategy<Value = (i64, u32)> {
    (-50i64..=50, 0u32..12)
}

fn term_list() -> impl Strategy<Value = Vec<(i64, u32)>> {
    proptest::collection::vec(small_term(), 0..10)
}

fn small_poly() -> impl Strategy<Value = Polynomial> {
    term_list().prop_map(|pairs| pairs.into_iter().collect())
}

fn is_normalized(p: &Polynomial) -> bool {
    p.terms().iter().all(|t| !t.is_zero())
        && p.terms().windows(2).all(|w| w[0].exponent() > w[1].exponent())
}

// Sum of absolute term values, the scale of rounding error in `evaluate`.
fn magnitude(p: &Polynomial, x: f64) -> f64 {
    p.terms()
        .iter()
        .map(|t| (t.coefficient() as f64).abs() * x.abs().powi(t.exponent() as i32))
        .sum()
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-12 * (1.0 + scale)
}

proptest! {
    #[test]
    fn add_term_keeps_normal_form(pairs in term_list()) {
        let mut p = Polynomial::new();
        for (c, e) in pairs {
            p.add_term(c, e);
            prop_assert!(is_normalized(&p));
        }
    }

    #[test]
    fn insertion_order_does_not_matter(pairs in term_list()) {
        let forward: Polynomial = pairs.iter().copied().collect();
        let backward: Polynomial = pairs.iter().rev().copied().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn arithmetic_results_are_normalized(p in small_poly(), q in small_poly()) {
        prop_assert!(is_normalized(&(&p + &q)));
        prop_assert!(is_normalized(&(&p - &q)));
        prop_assert!(is_normalized(&(&p * &q)));
    }

    #[test]
    fn add_identity(p in small_poly()) {
        let zero = Polynomial::new();
        prop_assert_eq!(&p + &zero, p.clone());
        prop_assert_eq!(&zero + &p, p);
    }

    #[test]
    fn additive_inverse(p in small_poly()) {
        prop_assert!((&p - &p).is_zero());
        prop_assert!((&p + &p.negate()).is_zero());
    }

    #[test]
    fn add_commutative(p in small_poly(), q in small_poly()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn mul_commutative(p in small_poly(), q in small_poly()) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn distributive(p in small_poly(), q in small_poly(), r in small_poly()) {
        let left = &p * &(&q + &r);
        let right = &(&p * &q) + &(&p * &r);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn merge_matches_term_by_term_insertion(p in small_poly(), q in small_poly()) {
        let mut expected = p.clone();
        expected.extend(q.terms().iter().copied());
        prop_assert_eq!(&p + &q, expected);
    }

    #[test]
    fn evaluation_is_linear(p in small_poly(), q in small_poly(), x in -3.0f64..3.0) {
        let sum = (&p + &q).evaluate(x);
        let scale = magnitude(&p, x) + magnitude(&q, x);
        prop_assert!(close(sum, p.evaluate(x) + q.evaluate(x), scale));
    }

    #[test]
    fn evaluation_respects_product(p in small_poly(), q in small_poly(), x in -2.0f64..2.0) {
        let product = (&p * &q).evaluate(x);
        let scale = magnitude(&p, x) * magnitude(&q, x);
        prop_assert!(close(product, p.evaluate(x) * q.evaluate(x), scale));
    }

    #[test]
    fn term_list_round_trip(p in small_poly()) {
        let reparsed: Polynomial = p.to_term_list().parse().unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn expression_round_trip(p in small_poly()) {
        let reparsed = Polynomial::parse_expression(&p.to_string()).unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn assign_from_copies_terms(p in small_poly(), q in small_poly()) {
        let mut target = q;
        target.assign_from(&p);
        prop_assert_eq!(target, p);
    }

    #[test]
    fn coefficient_lookup_agrees_with_terms(p in small_poly()) {
        for term in p.terms() {
            prop_assert_eq!(p.coefficient(term.exponent()), term.coefficient());
        }
        let missing: Vec<Term> = (0u32..12)
            .filter(|e| p.terms().iter().all(|t| t.exponent() != *e))
            .map(|e| Term::new(p.coefficient(e), e))
            .collect();
        prop_assert!(missing.iter().all(Term::is_zero));
    }
}
