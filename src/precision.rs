use crate::constants::POWERS_10;
use crate::Number;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Number of decimal digits in the magnitude of a value. Zero has a precision of 1.
///
/// ```
/// use numkit::Precision;
///
/// assert_eq!(0i32.precision(), 1);
/// assert_eq!(1000i32.precision(), 4);
/// assert_eq!(i64::MIN.precision(), 19);
/// ```
pub trait Precision {
    fn precision(&self) -> u32;
}

/// Number of trailing decimal zeros in the magnitude of a value. Zero has exactly one.
///
/// ```
/// use numkit::TrailingZeroes;
///
/// assert_eq!(1000i32.trailing_zeroes(), 3);
/// assert_eq!(0i8.trailing_zeroes(), 1);
/// assert_eq!((-120i16).trailing_zeroes(), 1);
/// ```
pub trait TrailingZeroes {
    fn trailing_zeroes(&self) -> u32;
}

// Binary search over the powers of ten; every power at or below n adds a digit.
#[inline]
fn digits(n: u64) -> u32 {
    POWERS_10.partition_point(|&power| power <= n).max(1) as u32
}

fn zeroes(mut n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n % 10 == 0 {
        n /= 10;
        count += 1;
    }
    count
}

macro_rules! impl_counters {
    ($t:ty) => {
        impl Precision for $t {
            #[inline]
            fn precision(&self) -> u32 {
                digits(u64::from(self.unsigned_abs()))
            }
        }

        impl TrailingZeroes for $t {
            #[inline]
            fn trailing_zeroes(&self) -> u32 {
                zeroes(u64::from(self.unsigned_abs()))
            }
        }
    };
}

impl_counters!(i8);
impl_counters!(i16);
impl_counters!(i32);
impl_counters!(i64);

impl Precision for BigInt {
    fn precision(&self) -> u32 {
        match self.magnitude().to_u64() {
            Some(n) => digits(n),
            None => self.magnitude().to_str_radix(10).len() as u32,
        }
    }
}

impl Precision for Decimal {
    /// The digits of the unscaled mantissa, so `1.500` has a precision of 4.
    fn precision(&self) -> u32 {
        self.mantissa().unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
    }
}

impl Number {
    /// The precision of an exact number, or `None` for a float.
    ///
    /// ```
    /// use numkit::Number;
    ///
    /// assert_eq!(Number::I16(-512).precision(), Some(3));
    /// assert_eq!(Number::F64(1.0).precision(), None);
    /// ```
    #[must_use]
    pub fn precision(&self) -> Option<u32> {
        match self {
            Number::I8(n) => Some(n.precision()),
            Number::I16(n) => Some(n.precision()),
            Number::I32(n) => Some(n.precision()),
            Number::I64(n) => Some(n.precision()),
            Number::BigInt(n) => Some(n.precision()),
            Number::Decimal(n) => Some(n.precision()),
            Number::F32(_) | Number::F64(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_counts_digits() {
        let tests = &[
            (0i64, 1),
            (1, 1),
            (-9, 1),
            (10, 2),
            (99, 2),
            (1000, 4),
            (-1000, 4),
            (999_999_999, 9),
            (1_000_000_000, 10),
            (i64::MAX, 19),
            (i64::MIN, 19),
        ];
        for &(n, expected) in tests {
            assert_eq!(n.precision(), expected, "{n}");
        }
        assert_eq!(i8::MIN.precision(), 3);
        assert_eq!(i16::MAX.precision(), 5);
        assert_eq!(i32::MIN.precision(), 10);
    }

    #[test]
    fn it_matches_the_formatted_length() {
        let mut n: i64 = 1;
        while let Some(next) = n.checked_mul(3) {
            assert_eq!(n.precision() as usize, n.to_string().len(), "{n}");
            assert_eq!((-n).precision() as usize, n.to_string().len(), "{n}");
            n = next;
        }
    }

    #[test]
    fn it_counts_arbitrary_precision_digits() {
        assert_eq!(BigInt::from(0).precision(), 1);
        assert_eq!(BigInt::from(-12_345).precision(), 5);
        assert_eq!(BigInt::from(u64::MAX).precision(), 20);
        assert_eq!((BigInt::from(u64::MAX) + 1u32).precision(), 20);
        assert_eq!((-BigInt::from(10).pow(40)).precision(), 41);
        assert_eq!(Decimal::ZERO.precision(), 1);
        assert_eq!(Decimal::new(1500, 3).precision(), 4);
        assert_eq!(Decimal::new(-5, 4).precision(), 1);
        assert_eq!(Decimal::MAX.precision(), 29);
    }

    #[test]
    fn it_counts_trailing_zeroes() {
        let tests = &[(0i32, 1), (1, 0), (10, 1), (-10, 1), (1000, 3), (1010, 1), (i32::MIN, 0)];
        for &(n, expected) in tests {
            assert_eq!(n.trailing_zeroes(), expected, "{n}");
        }
        assert_eq!(1_000_000_000_000_000_000i64.trailing_zeroes(), 18);
        assert_eq!((-100i8).trailing_zeroes(), 2);
        assert_eq!(i16::MIN.trailing_zeroes(), 0);
    }

    #[test]
    fn it_reports_number_precision() {
        assert_eq!(Number::I8(0).precision(), Some(1));
        assert_eq!(Number::I64(1000).precision(), Some(4));
        assert_eq!(Number::BigInt(BigInt::from(-7)).precision(), Some(1));
        assert_eq!(Number::Decimal(Decimal::new(12, 1)).precision(), Some(2));
        assert_eq!(Number::F32(0.0).precision(), None);
    }
}
