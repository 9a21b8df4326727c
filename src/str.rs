mod fmt;
mod fraction;
mod parse;

use crate::error::Error;
use numkit_parser::{MAX_RADIX, MIN_RADIX};

pub use fmt::strip_trailing_zeros;
pub use fraction::{is_number, parse_mixed};
pub use parse::{parse, parse_float, parse_integer, parse_or};

/// The base in which digit characters are interpreted. Always between 2 and 36 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Validates the radix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRadix`] if `radix` is outside of `2..=36`. An unsupported radix
    /// is a caller error and is never replaced by a default.
    ///
    /// ```
    /// use numkit::{Error, Radix};
    ///
    /// assert_eq!(Radix::new(16), Ok(Radix::HEXADECIMAL));
    /// assert_eq!(Radix::new(37), Err(Error::UnsupportedRadix(37)));
    /// ```
    pub fn new(radix: u32) -> Result<Radix, Error> {
        if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
            Ok(Radix(radix))
        } else {
            tracing::debug!(radix, "unsupported radix");
            Err(Error::UnsupportedRadix(radix))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Radix::new(radix)
    }
}

/// What a parse entry point produces when the input is absent, malformed or out of range for the
/// target width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnFailure<T> {
    /// Produce `None`.
    #[default]
    Absent,
    /// Produce the supplied value.
    Default(T),
}

impl<T> OnFailure<T> {
    #[inline]
    pub(crate) fn resolve(self) -> Option<T> {
        match self {
            OnFailure::Absent => None,
            OnFailure::Default(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_validates_radix() {
        for radix in 2..=36 {
            assert_eq!(Radix::new(radix).map(Radix::get), Ok(radix));
        }
        assert_eq!(Radix::new(0), Err(Error::UnsupportedRadix(0)));
        assert_eq!(Radix::new(1), Err(Error::UnsupportedRadix(1)));
        assert_eq!(Radix::try_from(37), Err(Error::UnsupportedRadix(37)));
        assert_eq!(Radix::default(), Radix::DECIMAL);
    }

    #[test]
    fn it_resolves_the_failure_policy() {
        assert_eq!(OnFailure::<i32>::Absent.resolve(), None);
        assert_eq!(OnFailure::Default(7).resolve(), Some(7));
        assert_eq!(OnFailure::<i32>::default(), OnFailure::Absent);
    }
}
