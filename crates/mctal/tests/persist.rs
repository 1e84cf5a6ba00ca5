//! Integration tests for saving and restoring parsed documents

use mctools_mctal::{load, read_json, save, write_json, Error, Mctal, ARCHIVE_VERSION};
use rstest::{fixture, rstest};

use std::path::PathBuf;

#[fixture]
fn multi() -> Mctal {
    Mctal::from_file("./data/multi.m").unwrap()
}

/// Scratch file unique to one test
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mctools-{}-{name}", std::process::id()))
}

#[rstest]
fn binary_round_trip(multi: Mctal) {
    let path = scratch("round_trip.bin");
    multi.save(&path).unwrap();
    let restored = Mctal::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored, multi);
}

#[rstest]
fn json_round_trip(multi: Mctal) {
    let path = scratch("round_trip.json");
    write_json(&multi, &path).unwrap();
    let restored = read_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.header, multi.header);
    assert_eq!(restored.tally_ids(), multi.tally_ids());

    for (a, b) in restored.tallies.iter().zip(&multi.tallies) {
        assert_eq!(a.dimensions(), b.dimensions());
        assert_eq!(a.cells().len(), b.cells().len());
        assert_eq!(a.energies.len(), b.energies.len());
        for (x, y) in a.cells().iter().zip(b.cells()) {
            for (u, v) in x.values.iter().zip(&y.values) {
                assert!((u - v).abs() <= 1e-12 * v.abs());
            }
        }
    }
}

#[rstest]
fn rejects_foreign_file() {
    let path = scratch("foreign.bin");
    std::fs::write(&path, b"not an archive at all").unwrap();
    let result = load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(Error::UnsupportedArchive { .. })));
}

#[rstest]
fn rejects_other_versions() {
    let path = scratch("version.bin");
    let mut bytes = b"MCTL".to_vec();
    bytes.extend((ARCHIVE_VERSION + 1).to_le_bytes());
    std::fs::write(&path, bytes).unwrap();
    let result = load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(Error::UnsupportedArchive { found, .. }) if found == "version 2"
    ));
}

#[rstest]
fn rejects_truncated_file() {
    let path = scratch("truncated.bin");
    std::fs::write(&path, b"MC").unwrap();
    let result = load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(Error::UnsupportedArchive { .. })));
}

#[rstest]
fn save_reports_io_errors(multi: Mctal) {
    let path = scratch("missing").join("dir").join("file.bin");
    assert!(matches!(save(&multi, path), Err(Error::Io(_))));
}
