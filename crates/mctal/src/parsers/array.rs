//! Reader for variable length numeric blocks
//!
//! Every list in a mctal file (tally numbers, objects, bin edges, values, and
//! fluctuation records) is written over as many lines as needed, each
//! continuation line starting with a blank. The block ends at the first line
//! that does not, which belongs to the next field.

use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

use crate::error::{Error, Result};

/// Numeric types that can be read from a block token
pub(crate) trait Numeric: Sized {
    /// Name used in error messages
    const NAME: &'static str;

    /// nom parser for a single token
    fn token(i: &str) -> IResult<&str, Self>;
}

impl Numeric for f64 {
    const NAME: &'static str = "real number";

    fn token(i: &str) -> IResult<&str, Self> {
        double(i)
    }
}

impl Numeric for i64 {
    const NAME: &'static str = "integer";

    fn token(i: &str) -> IResult<&str, Self> {
        complete::i64(i)
    }
}

impl Numeric for u32 {
    const NAME: &'static str = "unsigned integer";

    fn token(i: &str) -> IResult<&str, Self> {
        complete::u32(i)
    }
}

/// Lines starting with a blank continue the current numeric block
pub(crate) fn is_continuation(line: &str) -> bool {
    line.starts_with(|c: char| c == ' ' || c == '\t')
}

/// Read a numeric block starting at line index `start`
///
/// Consumes every adjacent blank-prefixed line and returns the values in file
/// order together with the index of the first line not consumed. Nothing is
/// consumed if the line at `start` does not continue a block, or if `start`
/// is past the end of the file.
pub(crate) fn read_array<T: Numeric>(lines: &[&str], start: usize) -> Result<(Vec<T>, usize)> {
    let mut values = Vec::new();
    let mut n = start;

    while let Some(line) = lines.get(n).filter(|l| is_continuation(l)) {
        for token in line.split_whitespace() {
            let (_, value) = all_consuming(T::token)(token)
                .map_err(|_| Error::format(n, T::NAME, token))?;
            values.push(value);
        }
        n += 1;
    }

    Ok((values, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 6] = [
        "vals",
        "   1.00000E+01 0.0500  5.00000E+00 0.1000",
        "   1.50000E+01 0.0200",
        "tfc     1       1       1       1       1       1       1       3       1",
        "      1000   1.50000E+01 0.0200  3.1E+04",
        "",
    ];

    #[test]
    fn reads_until_unblanked_line() {
        let (values, n) = read_array::<f64>(&LINES, 1).unwrap();
        assert_eq!(values, vec![10.0, 0.05, 5.0, 0.1, 15.0, 0.02]);
        assert_eq!(n, 3);
    }

    #[test]
    fn empty_block_consumes_nothing() {
        let (values, n) = read_array::<f64>(&LINES, 0).unwrap();
        assert!(values.is_empty());
        assert_eq!(n, 0);
    }

    #[test]
    fn stops_at_end_of_lines() {
        let (values, n) = read_array::<f64>(&LINES, 4).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(n, 5);

        let (values, n) = read_array::<f64>(&LINES, 10).unwrap();
        assert!(values.is_empty());
        assert_eq!(n, 10);
    }

    #[test]
    fn integer_mode() {
        let lines = ["     4    14", "    24", "tally    4"];
        let (values, n) = read_array::<u32>(&lines, 0).unwrap();
        assert_eq!(values, vec![4, 14, 24]);
        assert_eq!(n, 2);

        let lines = ["   10 -20", "f"];
        assert_eq!(read_array::<i64>(&lines, 0).unwrap().0, vec![10, -20]);
    }

    #[test]
    fn bad_token_reports_line() {
        let lines = ["ntal 1", "   4 x4"];
        let err = read_array::<u32>(&lines, 1).unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }));

        // real numbers are not integers
        let lines = ["   4.5"];
        assert!(read_array::<i64>(&lines, 0).is_err());
    }
}
