use crate::ops::cmp::cmp_impl;
use crate::Number;

use core::cmp::Ordering;

/// Determines whether two optional numbers of any kind are the same value.
///
/// Two absent values are equivalent, an absent and a present value are not. Numbers that compare
/// equal under [`compare`](crate::compare) are always equivalent. Beyond that, a pairing that
/// involves a float is also equivalent when the two values are less than `epsilon` apart.
///
/// ```
/// use numkit::{equivalent, Number};
///
/// let third = Number::F64(1.0 / 3.0);
/// assert!(equivalent(Some(&Number::I32(7)), Some(&Number::F32(7.0)), 0.0));
/// assert!(equivalent(Some(&third), Some(&Number::F32(0.333)), 1e-3));
/// assert!(!equivalent(Some(&third), Some(&Number::F32(0.333)), 1e-4));
/// assert!(!equivalent(Some(&Number::I8(1)), Some(&Number::I16(2)), 10.0));
/// ```
pub fn equivalent(a: Option<&Number>, b: Option<&Number>, epsilon: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => eq_impl(a, b, epsilon),
        _ => false,
    }
}

fn eq_impl(a: &Number, b: &Number, epsilon: f64) -> bool {
    if cmp_impl(a, b) == Ordering::Equal {
        return true;
    }
    if a.is_exact() && b.is_exact() {
        return false;
    }
    (a.to_f64() - b.to_f64()).abs() < epsilon
}
