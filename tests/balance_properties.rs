//! Property-based tests for the charge-balance arithmetic.

use nazvoslovi::balance::{complete_charge, cross_rule, gcd, reduce_by_gcd};
use proptest::prelude::*;

fn nonzero_pair() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..=1000, -1000i32..=1000).prop_filter("not both zero", |(a, b)| *a != 0 || *b != 0)
}

proptest! {
    #[test]
    fn gcd_divides_both(a in -1000i32..=1000, b in -1000i32..=1000) {
        let g = gcd(a, b);
        prop_assert!(g >= 0);
        if g != 0 {
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }

    #[test]
    fn reduced_pair_is_coprime((a, b) in nonzero_pair()) {
        let (x, y) = reduce_by_gcd(a, b).unwrap();
        prop_assert_eq!(gcd(x, y), 1);
        // same ratio, same signs
        prop_assert_eq!(a * y, b * x);
        prop_assert_eq!(a.signum(), x.signum());
        prop_assert_eq!(b.signum(), y.signum());
    }

    #[test]
    fn cross_rule_cancels_charge((x, y) in nonzero_pair()) {
        let (p, q) = cross_rule(x, y).unwrap();
        prop_assert_eq!(p * x + q * y, 0);
        prop_assert!(p >= 0);
    }

    #[test]
    fn cross_rule_inverts_itself(cation in 1i32..=8, anion in 1i32..=8) {
        let (reduced_cation, reduced_anion) = reduce_by_gcd(cation, -anion).unwrap();
        let amounts = cross_rule(cation, -anion).unwrap();
        prop_assert!(amounts.0 >= 1 && amounts.1 >= 1);
        let charges = cross_rule(amounts.0, amounts.1).unwrap();
        prop_assert_eq!(charges, (reduced_cation, reduced_anion));
    }

    #[test]
    fn complete_charge_inverts_multiplication(units in -50i32..=50, per_unit in 1i32..=8) {
        prop_assert_eq!(complete_charge(units * per_unit, per_unit), Some(units));
    }

    #[test]
    fn complete_charge_needs_positive_unit(charge in -50i32..=50, per_unit in -8i32..=0) {
        prop_assert_eq!(complete_charge(charge, per_unit), None);
    }
}

#[test]
fn both_zero_cannot_be_reduced() {
    assert_eq!(reduce_by_gcd(0, 0), None);
    assert_eq!(cross_rule(0, 0), None);
}
