use crate::error::Error;
use crate::str::{parse, parse_float, OnFailure};

use core::fmt;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};
use rust_decimal::Decimal;
use tracing::debug;

/// A number of any of the supported representations.
///
/// Equality and ordering compare numeric values across representations, so `Number::I8(1)` equals
/// `Number::F64(1.0)`. See [`compare`](crate::compare) for the exact total order.
#[derive(Clone, Debug)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    BigInt(BigInt),
    Decimal(Decimal),
    F32(f32),
    F64(f64),
}

/// The representation of a [`Number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    BigInt,
    Decimal,
    F32,
    F64,
}

impl NumberKind {
    /// Returns `true` for representations that hold every value exactly, which is every kind except
    /// the floating point ones.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        !matches!(self, NumberKind::F32 | NumberKind::F64)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberKind::I8 => "i8",
            NumberKind::I16 => "i16",
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::BigInt => "BigInt",
            NumberKind::Decimal => "Decimal",
            NumberKind::F32 => "f32",
            NumberKind::F64 => "f64",
        };
        f.pad(name)
    }
}

impl Number {
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        match self {
            Number::I8(_) => NumberKind::I8,
            Number::I16(_) => NumberKind::I16,
            Number::I32(_) => NumberKind::I32,
            Number::I64(_) => NumberKind::I64,
            Number::BigInt(_) => NumberKind::BigInt,
            Number::Decimal(_) => NumberKind::Decimal,
            Number::F32(_) => NumberKind::F32,
            Number::F64(_) => NumberKind::F64,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.kind().is_exact()
    }

    /// Parses `text` as the given kind.
    ///
    /// Fixed width integers accept `sign? digit+` in radix 10, floats use the standard float
    /// grammar, big integers accept an optionally signed run of digits and decimals accept either
    /// plain or scientific notation. Returns `None` for malformed text or text that does not fit.
    ///
    /// ```
    /// use numkit::{Number, NumberKind};
    ///
    /// assert_eq!(Number::parse("-128", NumberKind::I8), Some(Number::I8(-128)));
    /// assert_eq!(Number::parse("128", NumberKind::I8), None);
    /// assert_eq!(Number::parse("1.50", NumberKind::Decimal).map(|n| n.to_string()), Some("1.50".into()));
    /// ```
    pub fn parse(text: &str, kind: NumberKind) -> Option<Number> {
        match kind {
            NumberKind::I8 => parse::<i8>(text).map(Number::I8),
            NumberKind::I16 => parse::<i16>(text).map(Number::I16),
            NumberKind::I32 => parse::<i32>(text).map(Number::I32),
            NumberKind::I64 => parse::<i64>(text).map(Number::I64),
            NumberKind::BigInt => text.parse::<BigInt>().ok().map(Number::BigInt),
            NumberKind::Decimal => Decimal::from_str_exact(text)
                .or_else(|_| Decimal::from_scientific(text))
                .ok()
                .map(Number::Decimal),
            NumberKind::F32 => parse_float::<f32>(Some(text), OnFailure::Absent).map(Number::F32),
            NumberKind::F64 => parse_float::<f64>(Some(text), OnFailure::Absent).map(Number::F64),
        }
    }

    /// Converts to the given kind.
    ///
    /// Conversion to a fixed width integer or a float follows the usual narrowing rules: integers
    /// keep their low order bits, floats saturate and lose their fraction. Conversion to a big
    /// integer truncates any fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrepresentable`] when converting a non-finite float to a big integer or
    /// decimal, or a value outside the decimal range to a decimal.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use numkit::{Error, Number, NumberKind};
    ///
    /// assert_eq!(Number::I32(300).convert(NumberKind::I8), Ok(Number::I8(44)));
    /// assert_eq!(Number::F64(2.75).convert(NumberKind::BigInt), Ok(Number::BigInt(BigInt::from(2))));
    /// assert_eq!(
    ///     Number::F64(f64::NAN).convert(NumberKind::Decimal),
    ///     Err(Error::Unrepresentable(NumberKind::Decimal))
    /// );
    /// ```
    pub fn convert(&self, kind: NumberKind) -> Result<Number, Error> {
        let converted = match kind {
            NumberKind::I8 => Some(Number::I8(self.to_i8())),
            NumberKind::I16 => Some(Number::I16(self.to_i16())),
            NumberKind::I32 => Some(Number::I32(self.to_i32())),
            NumberKind::I64 => Some(Number::I64(self.to_i64())),
            NumberKind::BigInt => self.to_bigint().map(Number::BigInt),
            NumberKind::Decimal => self.to_decimal().map(Number::Decimal),
            NumberKind::F32 => Some(Number::F32(self.to_f32())),
            NumberKind::F64 => Some(Number::F64(self.to_f64())),
        };
        converted.ok_or_else(|| {
            debug!(from = %self.kind(), to = %kind, "unrepresentable conversion");
            Error::Unrepresentable(kind)
        })
    }

    /// Narrows integer kinds to the smallest fixed width that holds the value. Big integers that do
    /// not fit in an `i64` are kept as they are, as are decimals and floats.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use numkit::{Number, NumberKind};
    ///
    /// assert_eq!(Number::I64(-200).reduce().kind(), NumberKind::I16);
    /// assert_eq!(Number::BigInt(BigInt::from(7)).reduce().kind(), NumberKind::I8);
    /// ```
    #[must_use]
    pub fn reduce(&self) -> Number {
        let value = match self {
            Number::I8(_) | Number::I16(_) | Number::I32(_) | Number::I64(_) => self.to_i64(),
            Number::BigInt(n) => match n.to_i64() {
                Some(value) => value,
                None => return self.clone(),
            },
            Number::Decimal(_) | Number::F32(_) | Number::F64(_) => return self.clone(),
        };
        if let Ok(value) = i8::try_from(value) {
            Number::I8(value)
        } else if let Ok(value) = i16::try_from(value) {
            Number::I16(value)
        } else if let Ok(value) = i32::try_from(value) {
            Number::I32(value)
        } else {
            Number::I64(value)
        }
    }

    /// The low order 64 bits of the integer part, or the saturated integer part of a float.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        match *self {
            Number::I8(n) => i64::from(n),
            Number::I16(n) => i64::from(n),
            Number::I32(n) => i64::from(n),
            Number::I64(n) => n,
            Number::BigInt(ref n) => wrapping_i64(n),
            // Every truncated decimal fits in an i128
            Number::Decimal(ref n) => n.trunc().to_i128().map_or(0, |n| n as i64),
            Number::F32(n) => n as i64,
            Number::F64(n) => n as i64,
        }
    }

    #[must_use]
    pub fn to_i32(&self) -> i32 {
        match *self {
            Number::F32(n) => n as i32,
            Number::F64(n) => n as i32,
            _ => self.to_i64() as i32,
        }
    }

    #[must_use]
    pub fn to_i16(&self) -> i16 {
        match *self {
            Number::F32(n) => n as i16,
            Number::F64(n) => n as i16,
            _ => self.to_i64() as i16,
        }
    }

    #[must_use]
    pub fn to_i8(&self) -> i8 {
        match *self {
            Number::F32(n) => n as i8,
            Number::F64(n) => n as i8,
            _ => self.to_i64() as i8,
        }
    }

    /// The nearest `f64`. Big integers beyond the `f64` range become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match *self {
            Number::I8(n) => f64::from(n),
            Number::I16(n) => f64::from(n),
            Number::I32(n) => f64::from(n),
            Number::I64(n) => n as f64,
            Number::BigInt(ref n) => n.to_f64().unwrap_or_else(|| {
                if n.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }),
            Number::Decimal(ref n) => n.to_f64().unwrap_or(f64::NAN),
            Number::F32(n) => f64::from(n),
            Number::F64(n) => n,
        }
    }

    #[must_use]
    pub fn to_f32(&self) -> f32 {
        match *self {
            Number::F32(n) => n,
            _ => self.to_f64() as f32,
        }
    }

    /// The integer part as a big integer, or `None` for a non-finite float.
    #[must_use]
    pub fn to_bigint(&self) -> Option<BigInt> {
        match *self {
            Number::I8(n) => Some(BigInt::from(n)),
            Number::I16(n) => Some(BigInt::from(n)),
            Number::I32(n) => Some(BigInt::from(n)),
            Number::I64(n) => Some(BigInt::from(n)),
            Number::BigInt(ref n) => Some(n.clone()),
            Number::Decimal(ref n) => n.trunc().to_i128().map(BigInt::from),
            Number::F32(n) => BigInt::from_f32(n.trunc()),
            Number::F64(n) => BigInt::from_f64(n.trunc()),
        }
    }

    /// The value as a decimal, or `None` if it is non-finite or outside the decimal range.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match *self {
            Number::I8(n) => Some(Decimal::from(n)),
            Number::I16(n) => Some(Decimal::from(n)),
            Number::I32(n) => Some(Decimal::from(n)),
            Number::I64(n) => Some(Decimal::from(n)),
            Number::BigInt(ref n) => n.to_i128().and_then(Decimal::from_i128),
            Number::Decimal(n) => Some(n),
            Number::F32(n) => Decimal::from_f32(n),
            Number::F64(n) => Decimal::from_f64(n),
        }
    }
}

// Two's complement truncation to the low 64 bits.
fn wrapping_i64(n: &BigInt) -> i64 {
    let low = n.iter_u64_digits().next().unwrap_or(0);
    if n.is_negative() {
        low.wrapping_neg() as i64
    } else {
        low as i64
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => fmt::Display::fmt(n, f),
            Number::I16(n) => fmt::Display::fmt(n, f),
            Number::I32(n) => fmt::Display::fmt(n, f),
            Number::I64(n) => fmt::Display::fmt(n, f),
            Number::BigInt(n) => fmt::Display::fmt(n, f),
            Number::Decimal(n) => fmt::Display::fmt(n, f),
            Number::F32(n) => fmt::Display::fmt(n, f),
            Number::F64(n) => fmt::Display::fmt(n, f),
        }
    }
}

macro_rules! impl_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Number {
            #[inline]
            fn from(n: $t) -> Self {
                Number::$variant(n)
            }
        }
    };
}

impl_from!(i8, I8);
impl_from!(i16, I16);
impl_from!(i32, I32);
impl_from!(i64, I64);
impl_from!(BigInt, BigInt);
impl_from!(Decimal, Decimal);
impl_from!(f32, F32);
impl_from!(f64, F64);
