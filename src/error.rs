use crate::number::NumberKind;
use alloc::string::String;
use core::fmt;
use numkit_parser::{ParserError, MAX_RADIX, MIN_RADIX};

/// Error type for the library.
///
/// These are contract errors: they signal a caller bug or an arithmetic impossibility. Malformed
/// numeric text is never reported through this type; the parse entry points resolve it through
/// their [`OnFailure`](crate::OnFailure) policy instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    UnsupportedRadix(u32),
    IndexOutOfRange { from: usize, to: usize, len: usize },
    NegativeUnsigned(String),
    MultiplyOverflow(i64, i64),
    PowOverflow(i64, u32),
    Unrepresentable(NumberKind),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnsupportedRadix(radix) => write!(
                f,
                "Unsupported radix {}: must be between {} and {} inclusive",
                radix, MIN_RADIX, MAX_RADIX
            ),
            Self::IndexOutOfRange { from, to, len } => {
                write!(f, "Range {}..{} out of bounds for length {}", from, to, len)
            }
            Self::NegativeUnsigned(ref value) => write!(f, "signed < 0: {}", value),
            Self::MultiplyOverflow(a, b) => write!(f, "Multiplication overflows i64: {} * {}", a, b),
            Self::PowOverflow(base, exp) => write!(f, "Exponentiation overflows i64: {}^{}", base, exp),
            Self::Unrepresentable(kind) => write!(f, "Value cannot be represented as {}", kind),
        }
    }
}

// Only an unsupported radix is a contract violation; every other parser error is malformed input.
pub(crate) fn radix_error(err: ParserError) -> Option<Error> {
    match err {
        ParserError::UnsupportedRadix(radix) => Some(Error::UnsupportedRadix(radix)),
        _ => None,
    }
}
