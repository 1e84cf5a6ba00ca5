use serde::{Deserialize, Serialize};

/// Mctal file header information
///
/// This is basic metadata for run information and the list of tallies
/// contained within the file.
///
/// For example, take the following header:
///
/// ```text
/// mcnpx   2.7.0   01/20/15 10:11:12   2   1000000   43789221
/// Simple cylinder in a neutron beam
/// ntal     2
///     4   14
/// ```
///
/// This would parse to the [Header] as:
///
/// ```json
/// Header {
///     code: "mcnpx",
///     version: "2.7.0",
///     probid: "01/20/15 10:11:12",
///     dump: 2,
///     n_particles: 1000000,
///     n_random: 43789221,
///     title: "Simple cylinder in a neutron beam",
///     n_tallies: 2,
///     n_perturbations: 0,
///     tally_numbers: [4, 14],
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Name of the code, e.g. "mcnpx"
    pub code: String,
    /// Code version, e.g. "2.7.0"
    pub version: String,
    /// Date and time run, joined from the two problem id tokens
    pub probid: String,
    /// Dump number
    pub dump: u32,
    /// Number of particle histories
    pub n_particles: u64,
    /// Number of pseudo-random numbers
    pub n_random: u64,
    /// Title card of the input deck, verbatim
    pub title: String,
    /// Number of tallies declared on the `ntal` line
    pub n_tallies: u32,
    /// Number of perturbations in the problem
    pub n_perturbations: u32,
    /// Tally identifiers in file order
    pub tally_numbers: Vec<u32>,
}

impl Header {
    /// Check if a tally exists in the file results
    pub fn tally_exists(&self, id: u32) -> bool {
        self.tally_numbers.contains(&id)
    }
}
