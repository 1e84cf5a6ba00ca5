// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space0};
use nom::combinator::{all_consuming, opt};
use nom::sequence::preceded;
use nom::{self, IResult};

use crate::parsers::cause;
use crate::parsers::number::*;
use crate::{BinKind, Modifier, TallyKind, Tfc};

#[derive(Debug, PartialEq)]
pub(crate) struct TallyHeader {
    /// Tally number
    pub id: u32,
    /// Particle type(s)
    pub particle_type: i32,
    /// Tally type
    pub kind: TallyKind,
    /// Tally modifier (none, *, +)
    pub modifier: Modifier,
}

/// Declared bin count with its optional tag
#[derive(Debug, PartialEq)]
pub(crate) struct BinLine {
    pub kind: BinKind,
    pub number: usize,
}

/// Checks if the line can be parsed into the TallyHeader struct
pub(crate) fn is_new_tally(i: &str) -> bool {
    tally_header(i).is_ok()
}

/// Parse whole line into a TallyHeader struct
///
/// `tally <id> <particle type> <detector type> [<modifier>]`
pub(crate) fn tally_header(i: &str) -> IResult<&str, TallyHeader> {
    let (i, id) = tally_number(i)?;
    let (i, particle_type) = int32(i)?;
    let (i, kind) = tally_kind(i)?;
    let (i, modifier) = opt(modifier)(i)?;
    let (i, _) = all_consuming(space0)(i)?;

    Ok((
        i,
        TallyHeader {
            id,
            particle_type,
            kind,
            modifier: modifier.unwrap_or_default(),
        },
    ))
}

/// Parse the tally id following the "tally" tag
fn tally_number(i: &str) -> IResult<&str, u32> {
    preceded(tag_no_case("tally"), uint32)(i.trim_start())
}

/// Parse a tally identifier into a proper variant
fn tally_kind(i: &str) -> IResult<&str, TallyKind> {
    let (i, kind) = int32(i)?;
    match TallyKind::try_from(kind) {
        Ok(kind) => Ok((i, kind)),
        Err(_) => Err(cause("invalid tally type")),
    }
}

/// Parse a tally modifier into an explicit type
fn modifier(i: &str) -> IResult<&str, Modifier> {
    let (i, modifier) = int32(i)?;
    match Modifier::try_from(modifier) {
        Ok(modifier) => Ok((i, modifier)),
        Err(_) => Err(cause("invalid tally modifier type")),
    }
}

/// Bin count line, e.g. `f 3`, `et 4`, `c 10 0`
///
/// The leading `token` must match, the optional `t`/`c` tag is kept and any
/// trailing flag is ignored.
pub(crate) fn bin_line(i: &str, token: char) -> IResult<&str, BinLine> {
    let (i, _) = char(token)(i.trim_start())?;
    let (i, tag) = opt(alt((char('t'), char('c'))))(i)?;
    let (i, number) = uint(i)?;
    let (i, _flag) = opt(uint)(i)?;
    let (i, _) = all_consuming(space0)(i)?;

    Ok((
        i,
        BinLine {
            kind: BinKind::from(tag),
            number,
        },
    ))
}

/// Check for the results section by the "vals" tag
pub(crate) fn is_vals(i: &str) -> bool {
    i.trim().eq_ignore_ascii_case("vals")
}

/// Parse the tally fluctuation chart summary, leaving the records empty
///
/// `tfc <n> <8 bin indices>`
pub(crate) fn tfc(i: &str) -> IResult<&str, Tfc> {
    let (mut i, _) = tag_no_case("tfc")(i.trim_start())?;
    let mut summary = [0u32; 9];
    for field in summary.iter_mut() {
        let (rest, value) = uint32(i)?;
        *field = value;
        i = rest;
    }
    let (i, _) = all_consuming(space0)(i)?;
    Ok((i, Tfc::from(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_with_four_fields() {
        let (_, header) = tally_header("tally    4   -1    0").unwrap();
        assert_eq!(header.id, 4);
        assert_eq!(header.particle_type, -1);
        assert_eq!(header.kind, TallyKind::None);
        assert_eq!(header.modifier, Modifier::None);
    }

    #[test]
    fn header_with_modifier() {
        let (_, header) = tally_header("tally   15    1    1    2").unwrap();
        assert_eq!(header.kind, TallyKind::Point);
        assert_eq!(header.modifier, Modifier::Plus);
    }

    #[test]
    fn header_rejects_bad_codes() {
        assert!(tally_header("tally 4 1 9").is_err());
        assert!(tally_header("tally 4 1").is_err());
        assert!(!is_new_tally("tfc 1 1 1 1 1 1 1 1 1"));
        assert!(is_new_tally("TALLY 4 1 0"));
    }

    #[test]
    fn bin_lines() {
        assert_eq!(
            bin_line("f       3", 'f'),
            Ok((
                "",
                BinLine {
                    kind: BinKind::None,
                    number: 3
                }
            ))
        );
        assert_eq!(bin_line("et     4", 'e').unwrap().1.kind, BinKind::Total);
        assert_eq!(bin_line("c 10 0", 'c').unwrap().1.number, 10);
        assert!(bin_line("d 1", 'u').is_err());
        assert!(bin_line("s 1 2 3", 's').is_err());
    }

    #[test]
    fn vals_tag() {
        assert!(is_vals("vals"));
        assert!(is_vals("vals  "));
        assert!(!is_vals("values"));
    }

    #[test]
    fn tfc_summary() {
        let (_, chart) =
            tfc("tfc    10       1       1       1       1       1       1       3       1").unwrap();
        assert_eq!(chart.n_records, 10);
        assert_eq!(chart.energy_bin, 3);
        assert!(chart.results.is_empty());
        assert!(tfc("tfc 10 1 1").is_err());
    }
}
