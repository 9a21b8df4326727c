use crate::{assert_radix, ParserError};

/// Returns the numeric value of `c` read as a digit, or the negated code point of `c` when it is
/// not one of `0-9`, `a-z` or `A-Z`. NUL reports `-1` so that the sentinel is always negative.
///
/// Letters map to their alphabet position plus ten regardless of `radix`, so the result may be
/// greater than or equal to `radix`; use [`is_digit`] to also check the bound.
pub fn digit(c: char, radix: u32) -> Result<i32, ParserError> {
    assert_radix(radix)?;
    Ok(match c {
        '0'..='9' => (c as i32) - ('0' as i32),
        'a'..='z' => (c as i32) + 10 - ('a' as i32),
        'A'..='Z' => (c as i32) + 10 - ('A' as i32),
        '\0' => -1,
        _ => -(c as i32),
    })
}

/// Determines if `c` is a digit in the provided radix.
pub fn is_digit(c: char, radix: u32) -> Result<bool, ParserError> {
    let value = digit(c, radix)?;
    Ok(0 <= value && (value as u32) < radix)
}

// The radix has already been validated by the caller.
#[inline]
pub(crate) fn digit_value(c: char, radix: u32) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 + 10 - 'a' as u32,
        'A'..='Z' => c as u32 + 10 - 'A' as u32,
        _ => return None,
    };
    if value < radix {
        Some(value)
    } else {
        None
    }
}
