use crate::constants::{HIGHEST_BIT_SET, OVERFLOW_ROUNDS};
use crate::Error;

use num_bigint::BigInt;
use num_rational::BigRational;
use rust_decimal::Decimal;
use tracing::debug;

/// Returns `a * b`, failing with [`Error::MultiplyOverflow`] if the product cannot be represented
/// as an `i64`.
///
/// ```
/// use numkit::maths::checked_mul;
///
/// assert_eq!(checked_mul(-3, 7), Ok(-21));
/// assert!(checked_mul(i64::MAX, 2).is_err());
/// ```
#[inline]
pub fn checked_mul(a: i64, b: i64) -> Result<i64, Error> {
    a.checked_mul(b).ok_or_else(|| {
        debug!(a, b, "i64 multiplication overflow");
        Error::MultiplyOverflow(a, b)
    })
}

/// Raises `base` to the power of `exp`, failing with [`Error::PowOverflow`] if the exact result
/// cannot be represented as an `i64`.
///
/// Uses square-and-multiply with the number of rounds taken from a precomputed bit-length table,
/// so no floating point is involved. Bases of `-1`, `0` and `1` are representable for any exponent.
///
/// ```
/// use numkit::maths::checked_pow;
///
/// assert_eq!(checked_pow(2, 62), Ok(1 << 62));
/// assert!(checked_pow(2, 63).is_err());
/// assert_eq!(checked_pow(-1, 7), Ok(-1));
/// assert_eq!(checked_pow(0, 0), Ok(1));
/// ```
pub fn checked_pow(base: i64, exp: u32) -> Result<i64, Error> {
    match base {
        1 => return Ok(1),
        -1 => return Ok(if exp & 1 == 0 { 1 } else { -1 }),
        0 => return Ok(if exp == 0 { 1 } else { 0 }),
        _ => {}
    }

    let rounds = HIGHEST_BIT_SET.get(exp as usize).copied().unwrap_or(OVERFLOW_ROUNDS);
    if rounds == OVERFLOW_ROUNDS {
        debug!(base, exp, "exponent overflows for any base with magnitude > 1");
        return Err(Error::PowOverflow(base, exp));
    }

    let overflow = |_| Error::PowOverflow(base, exp);
    let mut result = 1i64;
    let mut square = base;
    let mut remaining = exp;
    for round in 1..=rounds {
        if remaining & 1 != 0 {
            result = checked_mul(result, square).map_err(overflow)?;
        }
        remaining >>= 1;
        // The last square would never be used
        if round < rounds {
            square = checked_mul(square, square).map_err(overflow)?;
        }
    }
    Ok(result)
}

/// Returns `true` if the `f32` survives a round trip through `i32` unchanged.
pub fn is_whole_f32(n: f32) -> bool {
    (n as i32) as f32 == n
}

/// Returns `true` if the `f64` survives a round trip through `i64` unchanged.
pub fn is_whole_f64(n: f64) -> bool {
    (n as i64) as f64 == n
}

/// Rounds `n` half-up to the given number of decimal places. Negative `decimals` round to the
/// left of the decimal point.
///
/// ```
/// use numkit::maths::round_to_places;
///
/// assert_eq!(round_to_places(3.14159, 2), 3.14);
/// assert_eq!(round_to_places(2.5, 0), 3.0);
/// ```
pub fn round_to_places(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (n * factor + 0.5).floor() / factor
}

/// The arithmetic mean of the values, or `None` if there are none.
pub fn average_i64(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// The arithmetic mean of the values, or `None` if there are none.
pub fn average_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// The arithmetic mean of the values, or `None` if there are none or the sum overflows.
pub fn average_decimal(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let mut sum = Decimal::ZERO;
    for value in values {
        sum = sum.checked_add(*value)?;
    }
    sum.checked_div(Decimal::from(values.len() as u64))
}

/// The exact arithmetic mean of the values, or `None` if there are none.
///
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use numkit::maths::average_bigint;
///
/// let mean = average_bigint(&[BigInt::from(1), BigInt::from(2)]).unwrap();
/// assert_eq!(mean, BigRational::new(BigInt::from(3), BigInt::from(2)));
/// ```
pub fn average_bigint(values: &[BigInt]) -> Option<BigRational> {
    if values.is_empty() {
        return None;
    }
    let sum: BigInt = values.iter().sum();
    Some(BigRational::new(sum, BigInt::from(values.len())))
}
