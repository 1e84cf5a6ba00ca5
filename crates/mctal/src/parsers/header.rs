// nom parser combinators
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::{preceded, terminated};
use nom::{self, IResult};

use crate::parsers::number::{uint32, uint64};

#[derive(Debug, PartialEq)]
pub(crate) struct FirstLine {
    /// Name of the code, "mcnpx"
    pub code_name: String,
    /// Code version, i.e. "2.7.0"
    pub version: String,
    /// Date and time run, joined with a single space
    pub problem_id: String,
    /// dump number
    pub dump: u32,
    /// number of histories that were run
    pub nps: u64,
    /// number of pseudorandom numbers used
    pub random_numbers: u64,
}

/// Parse whole line into a FirstLine struct
///
/// Exactly seven blank-delimited fields, the problem id being two of them.
pub(crate) fn first_line(i: &str) -> IResult<&str, FirstLine> {
    all_consuming(terminated(first_line_fields, space0))(i)
}

fn first_line_fields(i: &str) -> IResult<&str, FirstLine> {
    let (i, code_name) = preceded(space0, word)(i)?;
    let (i, version) = preceded(space1, word)(i)?;
    let (i, date) = preceded(space1, word)(i)?;
    let (i, time) = preceded(space1, word)(i)?;
    let (i, dump) = preceded(space1, uint32)(i)?;
    let (i, nps) = preceded(space1, uint64)(i)?;
    let (i, rnd) = preceded(space1, uint64)(i)?;

    Ok((
        i,
        FirstLine {
            code_name: code_name.to_string(),
            version: version.to_string(),
            problem_id: format!("{date} {time}"),
            dump,
            nps,
            random_numbers: rnd,
        },
    ))
}

/// Parse the number of tallies and perturbations
pub(crate) fn ntal_npert(i: &str) -> IResult<&str, (u32, u32)> {
    let (i, ntal) = ntal(i)?;
    let (i, npert) = opt(npert)(i)?;
    Ok((i, (ntal, npert.unwrap_or_default())))
}

/// Parse the number of tallies following the "ntal" tag
fn ntal(i: &str) -> IResult<&str, u32> {
    preceded(tag_no_case("ntal"), uint32)(i.trim_start())
}

/// Parse the number of perturbations following the "npert" tag
fn npert(i: &str) -> IResult<&str, u32> {
    preceded(tag_no_case("npert"), uint32)(i.trim_start())
}

/// Any run of non-blank characters
fn word(i: &str) -> IResult<&str, &str> {
    is_not(" \t")(i)
}
