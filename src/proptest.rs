use crate::Number;

use num_bigint::BigInt;
use proptest::arbitrary::Arbitrary;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use rust_decimal::Decimal;

impl Arbitrary for Number {
    type Parameters = ();
    type Strategy = BoxedStrategy<Number>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<i8>().prop_map(Number::I8),
            any::<i16>().prop_map(Number::I16),
            any::<i32>().prop_map(Number::I32),
            any::<i64>().prop_map(Number::I64),
            // up to 128 bits so that values beyond every fixed width show up
            any::<(i64, u64)>().prop_map(|(hi, lo)| Number::BigInt((BigInt::from(hi) << 64u32) + lo)),
            // scale must be between 0..=28
            (any::<i64>(), 0u32..=28).prop_map(|(mantissa, scale)| Number::Decimal(Decimal::new(mantissa, scale))),
            proptest::num::f32::ANY.prop_map(Number::F32),
            proptest::num::f64::ANY.prop_map(Number::F64),
        ]
        .boxed()
    }
}
