use crate::Number;

use alloc::string::ToString;
use core::fmt;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{self, de::Unexpected};

/// Fixed width integers and floats are written as native numbers. Big integers and decimals are
/// written as strings so that no digits are lost by formats with bounded numbers.
///
/// ```
/// use numkit::Number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(serde_json::to_string(&Number::I16(-7)).unwrap(), "-7");
/// assert_eq!(serde_json::to_string(&Number::Decimal(Decimal::new(150, 2))).unwrap(), r#""1.50""#);
/// ```
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Number::I8(n) => serializer.serialize_i8(*n),
            Number::I16(n) => serializer.serialize_i16(*n),
            Number::I32(n) => serializer.serialize_i32(*n),
            Number::I64(n) => serializer.serialize_i64(*n),
            Number::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Number::Decimal(n) => serializer.serialize_str(&n.to_string()),
            Number::F32(n) => serializer.serialize_f32(*n),
            Number::F64(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Integers are read as `i64` when they fit and as big integers otherwise, floats as `f64`, and
/// strings as a big integer or a decimal. The kind of a number is therefore not always preserved by
/// a round trip, but its value is.
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Number, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> serde::de::Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number or a string holding an integer or decimal")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::I64(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(match i64::try_from(value) {
            Ok(value) => Number::I64(value),
            Err(_) => Number::BigInt(BigInt::from(value)),
        })
    }

    fn visit_i128<E>(self, value: i128) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::BigInt(BigInt::from(value)).reduce())
    }

    fn visit_u128<E>(self, value: u128) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::BigInt(BigInt::from(value)).reduce())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        Ok(Number::F64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Number, E>
    where
        E: serde::de::Error,
    {
        if let Ok(n) = value.parse::<BigInt>() {
            return Ok(Number::BigInt(n));
        }
        Decimal::from_str_exact(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map(Number::Decimal)
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Record {
        value: Number,
    }

    #[test]
    fn it_serializes_native_numbers() {
        let tests = &[
            (Number::I8(-8), "-8"),
            (Number::I32(i32::MAX), "2147483647"),
            (Number::I64(i64::MIN), "-9223372036854775808"),
            (Number::F64(0.5), "0.5"),
            (Number::F32(-1.25), "-1.25"),
        ];
        for (number, expected) in tests {
            assert_eq!(serde_json::to_string(number).unwrap(), *expected);
        }
    }

    #[test]
    fn it_serializes_arbitrary_precision_as_strings() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let record = Record {
            value: Number::BigInt(big),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"value":"123456789012345678901234567890"}"#
        );
        let record = Record {
            value: Number::Decimal(Decimal::new(-1050, 3)),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"value":"-1.050"}"#);
    }

    #[test]
    fn it_deserializes_values() {
        let tests = &[
            (r#"{"value":-8}"#, Number::I64(-8)),
            (r#"{"value":18446744073709551615}"#, Number::BigInt(BigInt::from(u64::MAX))),
            (r#"{"value":2.5}"#, Number::F64(2.5)),
            (r#"{"value":"-42"}"#, Number::BigInt(BigInt::from(-42))),
            (r#"{"value":"1.050"}"#, Number::Decimal(Decimal::new(105, 2))),
            (r#"{"value":"1e-3"}"#, Number::Decimal(Decimal::new(1, 3))),
        ];
        for (json, expected) in tests {
            let record: Record = serde_json::from_str(json).unwrap();
            assert_eq!(&record.value, expected, "{json}");
            assert_eq!(record.value.kind(), expected.kind(), "{json}");
        }
    }

    #[test]
    fn it_rejects_non_numbers() {
        assert!(serde_json::from_str::<Record>(r#"{"value":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"value":true}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"value":null}"#).is_err());
    }

    #[test]
    fn it_round_trips_values() {
        let numbers = [
            Number::I8(i8::MIN),
            Number::I16(-300),
            Number::F32(-2.5),
            Number::F64(-1e300),
            Number::BigInt(BigInt::from(u64::MAX) * 1000u32),
            Number::Decimal(Decimal::MAX),
        ];
        for number in numbers {
            let json = serde_json::to_string(&number).unwrap();
            let parsed: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, number, "{json}");
        }
    }
}
