mod digit;
mod integer;
mod text;

pub use digit::{digit, is_digit};
pub use integer::Integer;
pub use text::Text;

// Radix bounds, inclusive
pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserError {
    /// Parser input was empty
    EmptyInput,
    /// A sign was present without any digits following it
    NoDigits,
    /// Invalid character was found when parsing
    InvalidCharacter(char),
    /// Number is greater than the maximum value of the target width
    Overflow,
    /// Number is less than the minimum value of the target width
    Underflow,
    // The radix provided is unsupported (i.e. < 2 or > 36)
    UnsupportedRadix(u32),
}

impl core::fmt::Display for ParserError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParserError::EmptyInput => write!(f, "empty"),
            ParserError::NoDigits => write!(f, "no digits found"),
            ParserError::InvalidCharacter(c) => write!(f, "unknown character {:?}", c),
            ParserError::Overflow => write!(f, "number exceeds maximum value that can be represented"),
            ParserError::Underflow => write!(f, "number less than minimum value that can be represented"),
            ParserError::UnsupportedRadix(radix) if *radix < MIN_RADIX => write!(f, "unsupported radix < 2"),
            ParserError::UnsupportedRadix(radix) if *radix > MAX_RADIX => write!(f, "unsupported radix > 36"),
            ParserError::UnsupportedRadix(_) => write!(f, "unsupported radix"),
        }
    }
}

impl std::error::Error for ParserError {}

#[inline]
pub(crate) fn assert_radix(radix: u32) -> Result<(), ParserError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ParserError::UnsupportedRadix(radix))
    }
}
