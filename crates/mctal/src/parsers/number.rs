// nom parser combinators
use nom::character::complete::{self, digit1, space0};
use nom::multi::many1;
use nom::sequence::terminated;
use nom::IResult;

use crate::parsers::cause;

/// List of consecutive signed integer values
pub(crate) fn vector_of_i32(i: &str) -> IResult<&str, Vec<i32>> {
    many1(terminated(complete::i32, space0))(i.trim_start())
}

/// Signed 32-bit integer value, trimming preceding whitespace
pub(crate) fn int32(i: &str) -> IResult<&str, i32> {
    complete::i32(i.trim_start())
}

/// Unsigned 32-bit integer value, trimming preceding whitespace
pub(crate) fn uint32(i: &str) -> IResult<&str, u32> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = complete::u32(value)?;
    Ok((i, v))
}

/// Unsigned 64-bit integer value, trimming preceding whitespace
pub(crate) fn uint64(i: &str) -> IResult<&str, u64> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = complete::u64(value)?;
    Ok((i, v))
}

/// Unsigned size value, trimming preceding whitespace
pub(crate) fn uint(i: &str) -> IResult<&str, usize> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = complete::u64(value)?;
    let v = usize::try_from(v).map_err(|_| cause("count too large for usize"))?;
    Ok((i, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_vector() {
        assert_eq!(vector_of_i32("  1 0 -1"), Ok(("", vec![1, 0, -1])));
        assert!(vector_of_i32("   ").is_err());
    }

    #[test]
    fn unsigned_values() {
        assert_eq!(uint32("   104 rest"), Ok((" rest", 104)));
        assert_eq!(uint64(" 1296681"), Ok(("", 1296681)));
        assert_eq!(uint("7"), Ok(("", 7)));
        assert!(uint("99999999999999999999").is_err());
        assert!(uint32("-3").is_err());
        assert_eq!(int32(" -3"), Ok(("", -3)));
    }
}
