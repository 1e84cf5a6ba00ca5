//! Save and restore parsed documents
//!
//! Archives are a bincode encoding of a small envelope around the [Mctal]
//! document, so an archive from an incompatible version is rejected rather
//! than decoded into garbage.

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::Mctal;

// external crates
use log::info;
use serde::{Deserialize, Serialize};

/// Identifies an archive written by this crate
const MAGIC: [u8; 4] = *b"MCTL";

/// Bumped whenever the serialised model changes shape
pub const ARCHIVE_VERSION: u32 = 1;

#[derive(Serialize)]
struct ArchiveRef<'a> {
    magic: [u8; 4],
    version: u32,
    mctal: &'a Mctal,
}

#[derive(Deserialize)]
struct ArchiveHeader {
    magic: [u8; 4],
    version: u32,
}

#[derive(Deserialize)]
struct Archive {
    #[allow(dead_code)]
    magic: [u8; 4],
    #[allow(dead_code)]
    version: u32,
    mctal: Mctal,
}

/// Write a [Mctal] to a binary archive at `path`
///
/// ```rust, no_run
/// # use mctools_mctal::{load, save, Mctal};
/// let mctal = Mctal::from_file("path/to/mctal_file").unwrap();
/// save(&mctal, "mctal.bin").unwrap();
///
/// // Restored exactly as it was saved
/// assert_eq!(load("mctal.bin").unwrap(), mctal);
/// ```
pub fn save<P: AsRef<Path>>(mctal: &Mctal, path: P) -> Result<()> {
    info!("Saving archive to {}", path.as_ref().display());
    let f = BufWriter::new(File::create(path)?);
    let archive = ArchiveRef {
        magic: MAGIC,
        version: ARCHIVE_VERSION,
        mctal,
    };
    Ok(bincode::serialize_into(f, &archive)?)
}

/// Read a [Mctal] from a binary archive written by [save()]
///
/// Fails with [Error::UnsupportedArchive] if the file was not written by a
/// compatible version.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mctal> {
    info!("Loading archive from {}", path.as_ref().display());
    let bytes = std::fs::read(path)?;

    // check the envelope before decoding the whole document
    let header: ArchiveHeader =
        bincode::deserialize(&bytes).map_err(|_| unsupported("unreadable header"))?;
    if header.magic != MAGIC {
        return Err(unsupported(&String::from_utf8_lossy(&header.magic)));
    }
    if header.version != ARCHIVE_VERSION {
        return Err(unsupported(&format!("version {}", header.version)));
    }

    let archive: Archive = bincode::deserialize(&bytes)?;
    Ok(archive.mctal)
}

/// Write a [Mctal] to a pretty JSON file for inspection
pub fn write_json<P: AsRef<Path>>(mctal: &Mctal, path: P) -> Result<()> {
    info!("Writing JSON to {}", path.as_ref().display());
    let f = BufWriter::new(File::create(path)?);
    Ok(serde_json::to_writer_pretty(f, mctal)?)
}

/// Read a [Mctal] back from a JSON file written by [write_json()]
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Mctal> {
    let f = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(f)?)
}

fn unsupported(found: &str) -> Error {
    Error::UnsupportedArchive {
        found: found.to_string(),
        supported: format!(
            "{} version {ARCHIVE_VERSION}",
            String::from_utf8_lossy(&MAGIC)
        ),
    }
}
