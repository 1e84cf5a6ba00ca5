// Crate types
use crate::error::{Error, Result};
use crate::persist;
use crate::reader::Reader;
use crate::{Header, Tally};

// Other libraries
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Data structure to store mctal file content
///
/// This [Mctal] is the primary data structure containing the parsed file data.
///
/// The mctal file contains all tally results of one dump of a RUNTAPE file
/// in a relatively fixed format. The [Header] holds run information and the
/// ordered list of tally numbers, and there is exactly one [Tally] for each of
/// them, in the same order.
///
/// The whole document is a plain owned value, so it can be cloned, compared,
/// and persisted with [save()](Mctal::save) and [load()](Mctal::load).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mctal {
    /// Header information and metadata
    pub header: Header,
    /// Collection of standard tallies, in header order
    pub tallies: Vec<Tally>,
}

impl Mctal {
    /// Create a new empty [Mctal] struct with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a mctal file
    ///
    /// Parses the file at `path` into the [Mctal] data structure for
    /// post-processing. The whole file is read into memory first.
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use mctools_mctal::Mctal;
    /// // Read every tally contained in the mctal file
    /// let mctal: Mctal = Mctal::from_file("path/to/mctal_file").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// Title card of the input deck
    pub fn title(&self) -> &str {
        &self.header.title
    }

    /// Get a reference to header data
    pub fn get_header(&self) -> &Header {
        &self.header
    }

    /// Tally numbers in file order
    pub fn tally_ids(&self) -> &[u32] {
        &self.header.tally_numbers
    }

    /// Find a specific tally
    ///
    /// Fails with [Error::TallyNotFound] if there is no tally `id`. See
    /// [get_tally()](Mctal::get_tally) for the `Option` equivalent.
    pub fn tally(&self, id: u32) -> Result<&Tally> {
        self.get_tally(id).ok_or(Error::TallyNotFound(id))
    }

    /// Find a specific tally
    ///
    /// If the tally exists it is returned as `Some(&Tally)`, otherwise `None`.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use mctools_mctal::{Mctal, Tally};
    /// // Add a dummy tally with id=104 to a mctal
    /// let mut mctal = Mctal::default();
    /// mctal.tallies = vec![Tally::new(104)];
    ///
    /// // Will return `Some(&Tally)` if it exists, otherwise `None`
    /// assert!(mctal.get_tally(104).is_some());
    /// assert!(mctal.get_tally(114).is_none());
    /// ```
    pub fn get_tally(&self, id: u32) -> Option<&Tally> {
        self.tallies.iter().find(|tally| tally.id == id)
    }

    /// Write the document to a binary archive, see [save()](crate::save)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save(self, path)
    }

    /// Read a document from a binary archive, see [load()](crate::load)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        persist::load(path)
    }
}

impl FromStr for Mctal {
    type Err = Error;

    /// Parse mctal file content already in memory
    ///
    /// ```rust
    /// # use mctools_mctal::Mctal;
    /// let text = "\
    /// mcnpx   2.7.0   01/20/15 10:11:12   2   1000000   43789221
    /// An empty problem
    /// ntal     0
    /// ";
    /// let mctal: Mctal = text.parse().unwrap();
    /// assert_eq!(mctal.title(), "An empty problem");
    /// assert!(mctal.tally_ids().is_empty());
    /// ```
    fn from_str(text: &str) -> Result<Self> {
        Reader::new(text).read()
    }
}
