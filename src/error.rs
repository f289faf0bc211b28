//! Error type.

use core::fmt::{self, Display};

/// Opaque error returned when a byte string is not a valid point encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid elliptic curve point encoding")
    }
}

impl std::error::Error for Error {}
