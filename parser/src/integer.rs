use crate::{assert_radix, digit::digit_value, ParserError, Text};

/// A signed integer width that can be parsed from a [`Text`] span.
pub trait Integer: Copy + Sized {
    /// Parses `text[from..to]` in the given radix.
    ///
    /// The grammar is `sign? digit+` where `sign` is `+` or `-`. Whitespace is not trimmed.
    /// Callers guarantee `from <= to <= text.len()`.
    fn parse_radix<S: Text + ?Sized>(text: &S, from: usize, to: usize, radix: u32) -> Result<Self, ParserError>;
}

// Accumulating negatively lets MIN be reached without a separate sign-flip overflow case; MIN has
// no positive counterpart in the same width.
macro_rules! impl_negative_accumulation {
    ($t:ty) => {
        impl Integer for $t {
            fn parse_radix<S: Text + ?Sized>(
                text: &S,
                from: usize,
                to: usize,
                radix: u32,
            ) -> Result<$t, ParserError> {
                assert_radix(radix)?;
                if from == to {
                    return Err(ParserError::EmptyInput);
                }

                let mut index = from;
                let mut negative = false;
                let mut limit = <$t>::MIN + 1;

                let first = text.char_at(index);
                if first < '0' {
                    match first {
                        '-' => {
                            negative = true;
                            limit = <$t>::MIN;
                        }
                        '+' => {}
                        c => return Err(ParserError::InvalidCharacter(c)),
                    }
                    if to - from == 1 {
                        return Err(ParserError::NoDigits);
                    }
                    index += 1;
                }

                let radix = radix as $t;
                let multmin = limit / radix;
                let mut result: $t = 0;
                while index < to {
                    let c = text.char_at(index);
                    index += 1;
                    let digit = match digit_value(c, radix as u32) {
                        Some(d) => d as $t,
                        None => return Err(ParserError::InvalidCharacter(c)),
                    };
                    if result < multmin {
                        return Err(out_of_range(negative));
                    }
                    result *= radix;
                    if result < limit + digit {
                        return Err(out_of_range(negative));
                    }
                    result -= digit;
                }

                Ok(if negative { result } else { -result })
            }
        }
    };
}

// Narrow widths go through i32 and are range checked afterwards.
macro_rules! impl_via_i32 {
    ($t:ty) => {
        impl Integer for $t {
            fn parse_radix<S: Text + ?Sized>(
                text: &S,
                from: usize,
                to: usize,
                radix: u32,
            ) -> Result<$t, ParserError> {
                let wide = i32::parse_radix(text, from, to, radix)?;
                <$t>::try_from(wide).map_err(|_| out_of_range(wide < 0))
            }
        }
    };
}

impl_negative_accumulation!(i32);
impl_negative_accumulation!(i64);
impl_via_i32!(i8);
impl_via_i32!(i16);

#[inline]
#[cold]
fn out_of_range(negative: bool) -> ParserError {
    if negative {
        ParserError::Underflow
    } else {
        ParserError::Overflow
    }
}
