#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![doc(html_root_url = "https://docs.rs/numkit/0.1.0")]
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
extern crate alloc;

mod constants;
mod error;
mod number;
mod ops;
mod precision;
mod str;

pub mod compound;
pub mod maths;
pub mod unsigned;

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use error::Error;
pub use number::{Number, NumberKind};
pub use numkit_parser::{digit, is_digit, Integer, ParserError, Text, MAX_RADIX, MIN_RADIX};
pub use ops::{compare, equivalent};
pub use precision::{Precision, TrailingZeroes};
pub use str::{is_number, parse, parse_float, parse_integer, parse_mixed, parse_or, strip_trailing_zeros, OnFailure, Radix};

/// A convenience module appropriate for glob imports (`use numkit::prelude::*;`).
pub mod prelude {
    pub use crate::{compare, equivalent, parse, parse_integer, parse_or, Number, NumberKind, OnFailure, Radix};
    pub use crate::{Precision, TrailingZeroes};
}
