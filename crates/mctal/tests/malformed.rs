//! Integration tests for files that must be rejected

use mctools_mctal::{Error, Mctal};
use rstest::{fixture, rstest};

#[fixture]
fn text() -> String {
    std::fs::read_to_string("./data/simple.m").unwrap()
}

/// Parse `text` with the first occurrence of `from` replaced by `to`
fn parse_with(text: &str, from: &str, to: &str) -> Result<Mctal, Error> {
    assert!(text.contains(from), "{from:?} is not in the reference file");
    text.replacen(from, to, 1).parse()
}

#[rstest]
fn reference_file_is_valid(text: String) {
    assert!(text.parse::<Mctal>().is_ok());
}

#[rstest]
#[case("   1   100000   4378922", "   1   100000")] // six fields
#[case("   1   100000   4378922", "   1   1e5   4378922")] // non-integer nps
fn bad_first_line(text: String, #[case] from: &str, #[case] to: &str) {
    let err = parse_with(&text, from, to).unwrap_err();
    assert!(matches!(err, Error::Format { line: 1, .. }));
}

#[rstest]
#[case("tally    4    1    0", "tally    5    1    0")] // name differs from the list
#[case("ntal     1\n    4", "ntal     2\n    4")] // list shorter than declared
#[case("f       1\n    10", "f       1\n    1x")] // non-numeric object
#[case("d       1\nu       0", "u       0\nd       1")] // bin lines out of order
#[case("vals", "values")] // missing results tag
#[case("tfc     2", "tfc")] // incomplete summary
fn format_errors(text: String, #[case] from: &str, #[case] to: &str) {
    let err = parse_with(&text, from, to).unwrap_err();
    assert!(matches!(err, Error::Format { .. }), "{err:?}");
}

#[rstest]
fn error_reports_line_number(text: String) {
    let err = parse_with(&text, "    10", "    ten").unwrap_err();
    assert!(matches!(err, Error::Format { line: 8, .. }), "{err:?}");
}

#[rstest]
#[case("  1.50000E+01 0.0200\ntfc", "  1.50000E+01\ntfc")] // one float short
#[case("e       2\n  1.00000E+00  2.00000E+01", "e       3\n  1.00000E+00  2.00000E+01")] // edge count
#[case("f       1", "f       2")] // object list too short
#[case("    100000   1.50000E+01 0.0200  1.3E+04", "    100000   1.50000E+01 0.0200")] // partial record
#[case("tfc     2", "tfc     3")] // missing record
#[case(
    "f       1\n    10\nd       1\nu       0\ns       0\nm       0",
    "f       10000000000\nd       1\nu       0\ns       10000000000\nm       100000"
)] // bin counts overflow the number of cells
fn dimension_errors(text: String, #[case] from: &str, #[case] to: &str) {
    let err = parse_with(&text, from, to).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { tally: 4, .. }), "{err:?}");
}

#[rstest]
fn stream_short_of_declared_bins(text: String) {
    // two objects declared but data for one
    let err = parse_with(&text, "f       1\n    10", "f       2\n    10    20").unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            tally: 4,
            expected: 12,
            found: 6,
            ..
        }
    ));
}

#[rstest]
fn truncated_file(text: String) {
    let end = text.find("vals").unwrap();
    let err = text[..end].parse::<Mctal>().unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }), "{err:?}");
}

#[rstest]
fn undeclared_trailing_tally(text: String) {
    let extra = text.lines().skip(4).collect::<Vec<_>>().join("\n");
    let doubled = format!("{text}{}", extra.replacen("tally    4", "tally    5", 1));
    let err = doubled.parse::<Mctal>().unwrap_err();
    assert!(matches!(err, Error::Format { line: 22, .. }), "{err:?}");
}

#[rstest]
fn duplicate_tally_numbers(text: String) {
    let err = parse_with(&text, "ntal     1\n    4", "ntal     2\n    4    4").unwrap_err();
    assert!(matches!(err, Error::Format { line: 4, .. }), "{err:?}");
}
