use crate::error::{radix_error, Error};
use crate::str::{OnFailure, Radix};

use core::ops::{Bound, RangeBounds};
use core::str::FromStr;
use num_traits::Float;
use numkit_parser::{Integer, Text};
use tracing::{debug, trace};

/// Parses the `range` of `text` as a signed integer in the given `radix`.
///
/// The accepted grammar is `sign? digit+` with `sign` being `+` or `-`. Surrounding whitespace is
/// not trimmed. Absent, malformed or out of range text never produces an error: the outcome is
/// decided by `on_failure`, so with [`OnFailure::Default`] the result is always `Some`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `range` does not satisfy `from <= to <= text.len()`. This
/// is checked before any parsing happens.
///
/// ```
/// use numkit::{parse_integer, OnFailure, Radix};
///
/// let text = "id=-7f;";
/// assert_eq!(parse_integer::<i32, _, _>(Some(text), 3..6, Radix::HEXADECIMAL, OnFailure::Absent), Ok(Some(-127)));
/// assert_eq!(parse_integer::<i8, _, _>(Some(text), 3.., Radix::DECIMAL, OnFailure::Default(0)), Ok(Some(0)));
/// assert_eq!(parse_integer::<i64, str, _>(None, .., Radix::DECIMAL, OnFailure::Absent), Ok(None));
/// assert!(parse_integer::<i32, _, _>(Some(text), 4..99, Radix::DECIMAL, OnFailure::Absent).is_err());
/// ```
pub fn parse_integer<T, S, R>(
    text: Option<&S>,
    range: R,
    radix: Radix,
    on_failure: OnFailure<T>,
) -> Result<Option<T>, Error>
where
    T: Integer,
    S: Text + ?Sized,
    R: RangeBounds<usize>,
{
    let text = match text {
        Some(text) => text,
        None => return Ok(on_failure.resolve()),
    };
    let (from, to) = span(&range, text.len())?;
    match T::parse_radix(text, from, to, radix.get()) {
        Ok(value) => Ok(Some(value)),
        Err(err) => match radix_error(err) {
            Some(err) => Err(err),
            None => {
                trace!(radix = radix.get(), from, to, error = %err, "rejected integer text");
                Ok(on_failure.resolve())
            }
        },
    }
}

/// Parses the whole of `text` as a decimal integer, returning `None` if it is malformed or does
/// not fit in `T`.
///
/// ```
/// assert_eq!(numkit::parse::<i32>("-2147483648"), Some(i32::MIN));
/// assert_eq!(numkit::parse::<i32>("2147483648"), None);
/// ```
pub fn parse<T: Integer>(text: &str) -> Option<T> {
    parse_integer(Some(text), .., Radix::DECIMAL, OnFailure::Absent)
        .ok()
        .flatten()
}

/// Parses the whole of `text` as a decimal integer, returning `default` if it is malformed or does
/// not fit in `T`.
///
/// ```
/// assert_eq!(numkit::parse_or::<i16>("-32768", 0), i16::MIN);
/// assert_eq!(numkit::parse_or::<i16>("32768", -1), -1);
/// ```
pub fn parse_or<T: Integer>(text: &str, default: T) -> T {
    parse_integer(Some(text), .., Radix::DECIMAL, OnFailure::Default(default))
        .ok()
        .flatten()
        .unwrap_or(default)
}

/// Parses `text` with the standard float literal grammar of `T`, resolving absent or malformed
/// text through `on_failure`.
///
/// ```
/// use numkit::{parse_float, OnFailure};
///
/// assert_eq!(parse_float::<f64>(Some("-1.5e3"), OnFailure::Absent), Some(-1500.0));
/// assert_eq!(parse_float::<f32>(Some("1.5x"), OnFailure::Default(0.0)), Some(0.0));
/// assert_eq!(parse_float::<f64>(None, OnFailure::Absent), None);
/// ```
pub fn parse_float<T>(text: Option<&str>, on_failure: OnFailure<T>) -> Option<T>
where
    T: Float + FromStr,
{
    let text = match text {
        Some(text) => text,
        None => return on_failure.resolve(),
    };
    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            trace!(text, "rejected float text");
            on_failure.resolve()
        }
    }
}

// Resolves the range against the text length, rejecting anything outside `from <= to <= len`.
fn span<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<(usize, usize), Error> {
    let from = match range.start_bound() {
        Bound::Included(&from) => Some(from),
        Bound::Excluded(&from) => from.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let to = match range.end_bound() {
        Bound::Included(&to) => to.checked_add(1),
        Bound::Excluded(&to) => Some(to),
        Bound::Unbounded => Some(len),
    };
    match (from, to) {
        (Some(from), Some(to)) if from <= to && to <= len => Ok((from, to)),
        (from, to) => {
            let from = from.unwrap_or(usize::MAX);
            let to = to.unwrap_or(usize::MAX);
            debug!(from, to, len, "range out of bounds");
            Err(Error::IndexOutOfRange { from, to, len })
        }
    }
}
