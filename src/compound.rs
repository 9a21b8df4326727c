//! Packing of several narrow values into one wider integer.
//!
//! Field `0` always occupies the lowest order bits. Encoding never validates its inputs: every field
//! is truncated to its width, so a negative field decodes back to the same negative value only when
//! it is decoded at the width it was encoded with.
//!
//! ```
//! use numkit::compound::{decode, encode_i16, encode_f32_i32};
//!
//! let packed = encode_i16(1, -2, 3, i16::MIN);
//! assert_eq!(decode::<i16, _>(packed, 1), -2);
//! assert_eq!(decode::<i16, _>(packed, 3), i16::MIN);
//!
//! let packed = encode_f32_i32(1.5, -7);
//! assert_eq!(decode::<f32, _>(packed, 0), 1.5);
//! assert_eq!(decode::<i32, _>(packed, 1), -7);
//! ```

/// An integer that holds packed fields.
pub trait Packed: Copy {
    /// Shifts the raw bits of the value right by `shift` bits, wrapping `shift` modulo the width
    /// of `Self`.
    fn shifted_bits(self, shift: u32) -> u64;
}

/// A value that can be stored as a field of a [`Packed`] integer.
pub trait Field: Sized {
    const BITS: u32;

    /// Builds the field from the lowest `BITS` bits of `bits`.
    fn from_low_bits(bits: u64) -> Self;
}

macro_rules! impl_packed {
    ($t:ty, $u:ty) => {
        impl Packed for $t {
            #[inline]
            fn shifted_bits(self, shift: u32) -> u64 {
                (self as $u).wrapping_shr(shift) as u64
            }
        }
    };
}

macro_rules! impl_int_field {
    ($t:ty, $u:ty) => {
        impl Field for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn from_low_bits(bits: u64) -> Self {
                bits as $u as $t
            }
        }
    };
}

impl_packed!(i16, u16);
impl_packed!(i32, u32);
impl_packed!(i64, u64);

impl_int_field!(i8, u8);
impl_int_field!(i16, u16);
impl_int_field!(i32, u32);

impl Field for f32 {
    const BITS: u32 = 32;

    #[inline]
    fn from_low_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

/// Extracts the field at `position` from `value`.
///
/// There is no bounds check on `position`: the shift wraps modulo the width of `P`, so positions
/// beyond the last field yield an unspecified but valid field value.
#[inline]
pub fn decode<F: Field, P: Packed>(value: P, position: u32) -> F {
    F::from_low_bits(value.shifted_bits(position.wrapping_mul(F::BITS)))
}

#[inline]
const fn concat(fields: &[u64], width: u32) -> u64 {
    let mask = u64::MAX >> (64 - width);
    let mut packed = 0;
    let mut i = fields.len();
    while i > 0 {
        i -= 1;
        packed = (packed << width) | (fields[i] & mask);
    }
    packed
}

/// Packs two `i32` fields into an `i64`.
pub const fn encode_i32(a: i32, b: i32) -> i64 {
    concat(&[a as u32 as u64, b as u32 as u64], 32) as i64
}

/// Packs four `i16` fields into an `i64`.
pub const fn encode_i16(a: i16, b: i16, c: i16, d: i16) -> i64 {
    concat(
        &[a as u16 as u64, b as u16 as u64, c as u16 as u64, d as u16 as u64],
        16,
    ) as i64
}

/// Packs eight `i8` fields into an `i64`.
#[allow(clippy::too_many_arguments)]
pub const fn encode_i8(a: i8, b: i8, c: i8, d: i8, e: i8, f: i8, g: i8, h: i8) -> i64 {
    concat(
        &[
            a as u8 as u64,
            b as u8 as u64,
            c as u8 as u64,
            d as u8 as u64,
            e as u8 as u64,
            f as u8 as u64,
            g as u8 as u64,
            h as u8 as u64,
        ],
        8,
    ) as i64
}

/// Packs the bit patterns of two `f32` fields into an `i64`.
pub fn encode_f32(a: f32, b: f32) -> i64 {
    encode_i32(a.to_bits() as i32, b.to_bits() as i32)
}

/// Packs the bit pattern of an `f32` and an `i32` into an `i64`.
pub fn encode_f32_i32(a: f32, b: i32) -> i64 {
    encode_i32(a.to_bits() as i32, b)
}

/// Packs an `i32` and the bit pattern of an `f32` into an `i64`.
pub fn encode_i32_f32(a: i32, b: f32) -> i64 {
    encode_i32(a, b.to_bits() as i32)
}

/// Packs two `i16` fields into an `i32`.
pub const fn encode_i16_pair(a: i16, b: i16) -> i32 {
    concat(&[a as u16 as u64, b as u16 as u64], 16) as i32
}

/// Packs four `i8` fields into an `i32`.
pub const fn encode_i8_quad(a: i8, b: i8, c: i8, d: i8) -> i32 {
    concat(&[a as u8 as u64, b as u8 as u64, c as u8 as u64, d as u8 as u64], 8) as i32
}

/// Packs two `i8` fields into an `i16`.
pub const fn encode_i8_pair(a: i8, b: i8) -> i16 {
    concat(&[a as u8 as u64, b as u8 as u64], 8) as i16
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_places_field_zero_in_the_low_bits() {
        assert_eq!(encode_i32(1, 2), 0x0000_0002_0000_0001);
        assert_eq!(encode_i32(-1, 0), 0x0000_0000_ffff_ffff);
        assert_eq!(encode_i32(0, -1), -0x1_0000_0000);
        assert_eq!(encode_i16(1, 2, 3, 4), 0x0004_0003_0002_0001);
        assert_eq!(encode_i8(1, 2, 3, 4, 5, 6, 7, 8), 0x0807_0605_0403_0201);
        assert_eq!(encode_i16_pair(-1, 1), 0x0001_ffff);
        assert_eq!(encode_i8_quad(1, 2, 3, -128), 0x8003_0201_u32 as i32);
        assert_eq!(encode_i8_pair(-1, 0x7f), 0x7fff);
    }

    #[test]
    fn it_decodes_every_position() {
        let fields = [i8::MIN, -1, 0, 1, 2, 42, -42, i8::MAX];
        let packed = encode_i8(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5], fields[6], fields[7],
        );
        for (position, &field) in fields.iter().enumerate() {
            assert_eq!(decode::<i8, _>(packed, position as u32), field);
        }

        let fields = [i16::MIN, -300, 300, i16::MAX];
        let packed = encode_i16(fields[0], fields[1], fields[2], fields[3]);
        for (position, &field) in fields.iter().enumerate() {
            assert_eq!(decode::<i16, _>(packed, position as u32), field);
        }

        let packed = encode_i32(i32::MIN, i32::MAX);
        assert_eq!(decode::<i32, _>(packed, 0), i32::MIN);
        assert_eq!(decode::<i32, _>(packed, 1), i32::MAX);

        let packed = encode_i16_pair(-5, 5);
        assert_eq!(decode::<i16, _>(packed, 0), -5);
        assert_eq!(decode::<i16, _>(packed, 1), 5);

        let packed = encode_i8_quad(-1, -2, -3, -4);
        for position in 0..4 {
            assert_eq!(decode::<i8, _>(packed, position), -1 - position as i8);
        }

        let packed = encode_i8_pair(i8::MIN, 9);
        assert_eq!(decode::<i8, _>(packed, 0), i8::MIN);
        assert_eq!(decode::<i8, _>(packed, 1), 9);
    }

    #[test]
    fn it_decodes_float_fields() {
        let packed = encode_f32(-0.0, f32::INFINITY);
        assert_eq!(decode::<f32, _>(packed, 0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(decode::<f32, _>(packed, 1), f32::INFINITY);

        let packed = encode_i32_f32(-9, 2.5);
        assert_eq!(decode::<i32, _>(packed, 0), -9);
        assert_eq!(decode::<f32, _>(packed, 1), 2.5);

        let packed = encode_f32(f32::NAN, 1.0);
        assert!(decode::<f32, _>(packed, 0).is_nan());
    }

    #[test]
    fn it_wraps_out_of_range_positions() {
        let packed = encode_i32(7, 8);
        // 2 * 32 wraps to a shift of 0 in a 64 bit container
        assert_eq!(decode::<i32, _>(packed, 2), 7);
        assert_eq!(decode::<i8, _>(packed, 8), 7);
    }
}
