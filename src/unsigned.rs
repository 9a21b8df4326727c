//! Conversion between signed integers and "virtual unsigned" values of the same width.
//!
//! An unsigned view stores a value in `0..=2^W - 1` in a signed `W` bit integer by offsetting it
//! by the minimum value of that width, so `i8::MIN` holds `0` and `i8::MAX` holds `255`.

use crate::Error;

use alloc::{string::ToString, vec::Vec};
use num_bigint::{BigInt, Sign};
use tracing::debug;

/// A signed integer that can hold the unsigned view of a value.
pub trait Unsigned: Sized {
    /// The next wider signed type, which can hold every unsigned value of this width.
    type Signed;

    /// Reads `self` as an unsigned view and returns the value it holds.
    ///
    /// ```
    /// use numkit::unsigned::Unsigned;
    ///
    /// assert_eq!(i8::MIN.to_signed(), 0);
    /// assert_eq!((-1i8).to_signed(), 127);
    /// assert_eq!(i8::MAX.to_signed(), 255);
    /// ```
    fn to_signed(self) -> Self::Signed;

    /// Returns the unsigned view holding `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeUnsigned`] if `self` is negative.
    fn to_unsigned(self) -> Result<Self, Error>;
}

macro_rules! impl_unsigned {
    ($t:ty, $wide:ty) => {
        impl Unsigned for $t {
            type Signed = $wide;

            #[inline]
            fn to_signed(self) -> $wide {
                <$wide>::from(self) - <$wide>::from(<$t>::MIN)
            }

            fn to_unsigned(self) -> Result<$t, Error> {
                if self < 0 {
                    return Err(negative(&self));
                }
                Ok(self.wrapping_add(<$t>::MIN))
            }
        }
    };
}

impl_unsigned!(i8, i16);
impl_unsigned!(i16, i32);
impl_unsigned!(i32, i64);

impl Unsigned for i64 {
    type Signed = BigInt;

    fn to_signed(self) -> BigInt {
        BigInt::from(self) - BigInt::from(i64::MIN)
    }

    fn to_unsigned(self) -> Result<i64, Error> {
        if self < 0 {
            return Err(negative(&self));
        }
        Ok(self.wrapping_add(i64::MIN))
    }
}

/// Reads a big-endian magnitude as a non-negative [`BigInt`]. An empty slice is zero.
///
/// ```
/// use num_bigint::BigInt;
/// use numkit::unsigned::to_signed_bytes;
///
/// assert_eq!(to_signed_bytes(&[0xff, 0xff]), BigInt::from(65_535));
/// ```
pub fn to_signed_bytes(unsigned: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, unsigned)
}

/// Returns the big-endian magnitude of `signed` without the padding byte a two's complement
/// encoding adds to keep the sign bit clear. Zero is the empty magnitude.
///
/// # Errors
///
/// Returns [`Error::NegativeUnsigned`] if `signed` is negative.
pub fn to_unsigned_bytes(signed: &BigInt) -> Result<Vec<u8>, Error> {
    if signed.sign() == Sign::Minus {
        return Err(negative(signed));
    }
    let mut bytes = signed.to_signed_bytes_be();
    if bytes.first() == Some(&0) {
        bytes.remove(0);
    }
    Ok(bytes)
}

#[cold]
fn negative<T: ToString>(signed: &T) -> Error {
    let value = signed.to_string();
    debug!(%value, "negative value has no unsigned view");
    Error::NegativeUnsigned(value)
}
