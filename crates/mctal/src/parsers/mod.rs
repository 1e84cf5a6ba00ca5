// All nom parsers split amoung files for organisation
mod array;
mod header;
mod number;
mod tally;

// Internal re-exports for convenience
pub(crate) use array::*;
pub(crate) use header::*;
pub(crate) use number::*;
pub(crate) use tally::*;

/// More convenient error creation for nom
use nom::error::{Error, ErrorKind};
pub(in crate::parsers) fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}
