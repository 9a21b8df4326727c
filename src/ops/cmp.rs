use crate::Number;

use core::cmp::Ordering;
use num_bigint::BigInt;
use num_rational::BigRational;
use rust_decimal::Decimal;

/// Total order over optional numbers of any kind. `None` sorts before every number.
///
/// Values are compared exactly: an operand is never rounded to a float to meet the other one.
/// Floats order `-0.0` equal to `0.0`, and every NaN equal to every other NaN and greater than
/// everything else, infinities included.
///
/// ```
/// use core::cmp::Ordering;
/// use numkit::{compare, Number};
///
/// assert_eq!(compare(None, Some(&Number::I8(0))), Ordering::Less);
/// assert_eq!(compare(Some(&Number::I64(1)), Some(&Number::F32(1.0))), Ordering::Equal);
/// // 2^53 + 1 has no f64 representation, but it still compares greater than 2^53
/// assert_eq!(
///     compare(Some(&Number::I64((1 << 53) + 1)), Some(&Number::F64(9_007_199_254_740_992.0))),
///     Ordering::Greater
/// );
/// ```
pub fn compare(a: Option<&Number>, b: Option<&Number>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_impl(a, b),
    }
}

// Exact values borrowed from a number, widened to the smallest common shapes.
enum Exact<'a> {
    Int(i64),
    Big(&'a BigInt),
    Dec(&'a Decimal),
}

enum Value<'a> {
    Exact(Exact<'a>),
    Float(f64),
}

fn value(n: &Number) -> Value<'_> {
    match *n {
        Number::I8(n) => Value::Exact(Exact::Int(i64::from(n))),
        Number::I16(n) => Value::Exact(Exact::Int(i64::from(n))),
        Number::I32(n) => Value::Exact(Exact::Int(i64::from(n))),
        Number::I64(n) => Value::Exact(Exact::Int(n)),
        Number::BigInt(ref n) => Value::Exact(Exact::Big(n)),
        Number::Decimal(ref n) => Value::Exact(Exact::Dec(n)),
        Number::F32(n) => Value::Float(f64::from(n)),
        Number::F64(n) => Value::Float(n),
    }
}

pub(crate) fn cmp_impl(a: &Number, b: &Number) -> Ordering {
    match (value(a), value(b)) {
        (Value::Exact(a), Value::Exact(b)) => cmp_exact(&a, &b),
        (Value::Exact(a), Value::Float(b)) => cmp_exact_float(&a, b),
        (Value::Float(a), Value::Exact(b)) => cmp_exact_float(&b, a).reverse(),
        (Value::Float(a), Value::Float(b)) => cmp_float(a, b),
    }
}

fn cmp_exact(a: &Exact, b: &Exact) -> Ordering {
    match (a, b) {
        (Exact::Int(a), Exact::Int(b)) => a.cmp(b),
        (Exact::Big(a), Exact::Big(b)) => a.cmp(b),
        (Exact::Dec(a), Exact::Dec(b)) => a.cmp(b),
        (Exact::Int(a), Exact::Big(b)) => BigInt::from(*a).cmp(b),
        (Exact::Big(a), Exact::Int(b)) => (*a).cmp(&BigInt::from(*b)),
        (Exact::Int(a), Exact::Dec(b)) => Decimal::from(*a).cmp(b),
        (Exact::Dec(a), Exact::Int(b)) => (*a).cmp(&Decimal::from(*b)),
        // Neither domain holds the other
        (a, b) => to_ratio(a).cmp(&to_ratio(b)),
    }
}

fn cmp_exact_float(a: &Exact, b: f64) -> Ordering {
    if let Exact::Int(a) = *a {
        return cmp_int_float(a, b);
    }
    match BigRational::from_float(b) {
        Some(b) => to_ratio(a).cmp(&b),
        None if b == f64::NEG_INFINITY => Ordering::Greater,
        // Infinity or NaN
        None => Ordering::Less,
    }
}

fn cmp_int_float(a: i64, b: f64) -> Ordering {
    // 2^63, the first float above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if b.is_nan() || b >= LIMIT {
        return Ordering::Less;
    }
    if b < -LIMIT {
        return Ordering::Greater;
    }
    // Within the i64 range the integer part of the float converts exactly
    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal => {
            let fraction = b - whole;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ordering => ordering,
    }
}

fn cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0.0 and 0.0 compare equal here
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn to_ratio(value: &Exact) -> BigRational {
    match *value {
        Exact::Int(n) => BigRational::from_integer(BigInt::from(n)),
        Exact::Big(n) => BigRational::from_integer(n.clone()),
        Exact::Dec(n) => BigRational::new(
            BigInt::from(n.mantissa()),
            num_traits::pow(BigInt::from(10u8), n.scale() as usize),
        ),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        cmp_impl(self, other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_impl(self, other)
    }
}
