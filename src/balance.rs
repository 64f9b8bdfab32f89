//! Charge-balance arithmetic shared by every compound kind.
//!
//! [`cross_rule`] turns two oxidation numbers into the smallest amounts that
//! cancel their charge, or two amounts into the oxidation numbers that would.
//! [`complete_charge`] fills in the count of one partner so a known charge is
//! cancelled.

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i32
}

/// Divides both numbers by their greatest common divisor.
///
/// Returns `None` when both are zero.
pub fn reduce_by_gcd(a: i32, b: i32) -> Option<(i32, i32)> {
    match gcd(a, b) {
        0 => None,
        g => Some((a / g, b / g)),
    }
}

/// The cross rule.
///
/// Given two oxidation numbers with opposite signs, returns the amounts of
/// each partner; given two amounts, returns oxidation numbers with the
/// second one negative. The pair is reduced first, then swapped with the
/// sign flipped so the result always starts with a non-negative value:
///
/// ```text
/// (x, y) -> (y, -x)   if y >= 0
/// (x, y) -> (-y, x)   otherwise
/// ```
pub fn cross_rule(x: i32, y: i32) -> Option<(i32, i32)> {
    let (x, y) = reduce_by_gcd(x, y)?;
    if y >= 0 {
        Some((y, -x))
    } else {
        Some((-y, x))
    }
}

/// Number of `per_unit` charges needed to cancel `charge`, rounded down.
///
/// Returns `None` unless `per_unit` is positive.
pub fn complete_charge(charge: i32, per_unit: i32) -> Option<i32> {
    (per_unit > 0).then(|| charge.div_euclid(per_unit))
}
