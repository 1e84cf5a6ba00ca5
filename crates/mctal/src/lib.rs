//! Module for reading MCNP mctal files
//!
//! The mctal file contains all tally results of one dump of a RUNTAPE file
//! in a relatively fixed-format*.
//!
//! - [Mctal] - Primary data structure containing the parsed file data
//!
//! The data are broken into the following blocks:
//!
//! | Data block | Description                                                  |
//! | ---------- | ------------------------------------------------------------ |
//! | [Header]   | file metadata, run information, and the list of tallies      |
//! | [Tally]    | all standard `F` tallies, including tally fluctuation chart  |
//!
//! Each [Tally] is reshaped into [Cell]s, one for every combination of object,
//! segment, multiplier, and cosine bin, holding the energy spectrum of values
//! and relative errors. Cells are addressed with [Tally::cell()] using the
//! zero-based bin coordinates (see [Dimensions::offset] for the layout).
//!
//! \* *Note: numerical items do not need to be in the columns implied by
//! fortran formats, only blank-delimited and in the right order. Any line that
//! continues a list of numbers must start with a blank.*
//!
//! # Quickstart example
//!
//! Suppose there is a tally for the following:
//!
//! ```text
//! fc4   Example simple flux tally
//! f4:n  901 902 903     $ cells to tally
//! e4    1e-5 1.0 1e3    $ energy bins
//! ```
//!
//! ```rust, no_run
//! # use mctools_mctal::Mctal;
//! // Read all file data into the core data structure
//! let mctal = Mctal::from_file("/path/to/file.m").unwrap();
//!
//! // Find the data for `F4:N`
//! let tally = mctal.tally(4).unwrap();
//!
//! // Spectrum in cell 902, total last
//! let object = tally.find_object(902).unwrap();
//! let cell = tally.cell(object, 0, 0, 0).unwrap();
//! println!("{:?} +/- {:?}", cell.values, cell.errors);
//! ```
//!
//! # Persistence
//!
//! Parsed documents may be saved to a versioned binary archive with [save()]
//! and restored with [load()], or exported with [write_json()].

mod core;
mod error;
mod mctal;
mod parsers;
mod persist;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use mctal::Mctal;

#[doc(inline)]
pub use persist::{load, read_json, save, write_json, ARCHIVE_VERSION};

#[doc(inline)]
pub use self::core::*;
