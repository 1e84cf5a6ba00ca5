use crate::error::{Error, Result};
use crate::{describe, BinIndex, Cell, Dimensions};

use mctools_utils::ValueExt;

use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

/// Upper edge of an unbounded energy axis, as written by MCNP
pub const UNBOUNDED_ENERGY: f64 = 1e36;

/// Standard tally type data
///
/// Contains the results for one `F` tally of the mctal file.
///
/// The record is filled field by field in file order, then finalised by
/// [reshape()](Tally::reshape), which normalises the bin counts, completes the
/// bin edges, and splits the raw value stream into [Cell]s. After parsing it
/// is only read.
///
/// ### Bin edges
///
/// | Axis    | Stored edges                                   | Length      |
/// | ------- | ---------------------------------------------- | ----------- |
/// | cosine  | `[-1.0, 1.0]` for one bin, else `-1.0` + edges | count + 1   |
/// | energy  | `0.0` + edges + [EnergyEdge::Total]            | count + 2   |
/// | time    | as listed in the file                          | as declared |
///
/// ### Known limitation
///
/// User bins and time bins are declared in the file but are not part of the
/// cell addressing (see [Dimensions::offset]). Tallies with more than one user
/// or time bin will fail the value stream length check.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Tally number
    pub id: u32,
    /// Shorthand particle code if positive, explicit list follows if negative
    pub particle_type: i32,
    /// Signed multiplicity by particle slot, only for negative particle types
    pub particle_list: Option<Vec<i32>>,
    /// Detector tally type
    pub kind: TallyKind,
    /// Tally modifier (none, *, +)
    pub modifier: Modifier,
    /// Tally comment line, verbatim
    pub comment: String,

    /// Cell, surface, or detector numbers
    pub objects: Vec<i64>,
    /// Number of total vs. direct or flagged vs. unflagged bins
    pub flagged_bins: usize,
    /// Number of user bins as declared
    pub user_bins: usize,
    /// User bin values, if listed
    pub user_values: Vec<f64>,
    /// Segment bin values, if listed
    pub segment_values: Vec<f64>,
    /// False when the file declares no multiplier bins
    pub multiplier_flag: bool,
    /// Energy bin tag, [BinKind::Total] when the declared count includes a total
    pub energy_kind: BinKind,
    /// Bin counts for every axis
    pub dimensions: Dimensions,

    /// Cosine bin edges
    pub cosines: Vec<f64>,
    /// Energy bin edges (MeV), total last
    pub energies: Vec<EnergyEdge>,
    /// Time bin edges (shakes)
    pub times: Vec<f64>,

    /// Reshaped results, one per non-energy bin combination
    pub cells: Vec<Cell>,

    /// Tally fluctuation chart data
    pub tfc: Tfc,
}

impl Tally {
    /// Create an empty tally to fill while parsing
    pub fn new(id: u32) -> Self {
        Self {
            id,
            multiplier_flag: true,
            ..Default::default()
        }
    }

    /// Bin counts for every axis
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Human readable list of tallied particles
    ///
    /// ```rust
    /// # use mctools_mctal::Tally;
    /// let mut tally = Tally::new(4);
    /// tally.particle_type = 3;
    /// assert_eq!(tally.describe_particles(), "neutron, photon");
    /// ```
    pub fn describe_particles(&self) -> String {
        describe(
            self.particle_type,
            self.particle_list.as_deref().unwrap_or_default(),
        )
    }

    /// Flat offset of a cell, see [Dimensions::offset]
    pub fn offset(
        &self,
        object: usize,
        segment: usize,
        multiplier: usize,
        cosine: usize,
    ) -> Result<usize> {
        self.dimensions
            .offset(&BinIndex::new(object, segment, multiplier, cosine))
    }

    /// Bin coordinates of a flat offset, see [Dimensions::coordinates]
    pub fn coordinates(&self, offset: usize) -> Result<BinIndex> {
        self.dimensions.coordinates(offset)
    }

    /// Results for one bin combination
    ///
    /// Fails with [Error::BinOutOfRange] for coordinates outside of the
    /// declared bins.
    pub fn cell(
        &self,
        object: usize,
        segment: usize,
        multiplier: usize,
        cosine: usize,
    ) -> Result<&Cell> {
        let offset = self.offset(object, segment, multiplier, cosine)?;
        self.cells.get(offset).ok_or(Error::BinOutOfRange {
            axis: "cell",
            index: offset,
            count: self.cells.len(),
        })
    }

    /// All cells in storage order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of an object number (cell, surface, detector) in the object list
    pub fn find_object(&self, id: i64) -> Option<usize> {
        self.objects.iter().position(|&o| o == id)
    }

    /// Contiguous slice of every cell for the object at `index`
    pub fn cells_for_object(&self, index: usize) -> Result<&[Cell]> {
        let start = self.offset(index, 0, 0, 0)?;
        let stride = self.dimensions.n_cells() / self.dimensions.object_count;
        self.cells
            .get(start..start.saturating_add(stride))
            .ok_or(Error::BinOutOfRange {
                axis: "cell",
                index: start,
                count: self.cells.len(),
            })
    }

    /// Replace zero bin counts with a single implicit bin
    ///
    /// A declared multiplier count of zero also clears the multiplier flag, as
    /// the single bin is only a storage placeholder. Running this again on a
    /// normalised tally changes nothing.
    pub fn normalise(&mut self) {
        if self.dimensions.multiplier_count == 0 {
            self.multiplier_flag = false;
        }
        self.dimensions = self.dimensions.normalised();
    }

    /// Finalise the tally from the raw `vals` stream
    ///
    /// The stream holds interleaved `<value> <error>` pairs, with the energy
    /// bins (total last) for one cell before moving on to the next in
    /// [Dimensions::offset] order.
    ///
    /// This is the single finalisation step. It must run once, after every
    /// bin declaration has been read.
    pub fn reshape(&mut self, raw: &[f64]) -> Result<()> {
        self.check_edges()?;

        let unbounded_energy = self.dimensions.energy_count == 0;
        self.normalise();
        self.complete_edges(unbounded_energy);

        // an unbounded energy axis is written as a single pair, the bin is
        // its own total
        let n_pairs = if unbounded_energy {
            1
        } else {
            self.dimensions.energy_count + 1
        };

        // corrupt counts can declare more cells than can be addressed
        let Some((n_cells, cell_length)) = self
            .dimensions
            .checked_cells()
            .and_then(|n| Some((n, n.checked_mul(2)?)))
        else {
            error!("Declared bins overflow the number of cells");
            return Err(self.mismatch("number of cells", raw.len() / 2, usize::MAX));
        };

        if raw.len() % cell_length != 0 {
            error!("Value stream does not divide into {n_cells} cells");
            return Err(self.mismatch(
                "value stream",
                n_pairs.saturating_mul(cell_length),
                raw.len(),
            ));
        }

        let derived = raw.len() / cell_length;
        if derived != n_pairs {
            error!("Value stream has {derived} energy bins per cell, expected {n_pairs}");
            return Err(self.mismatch("energy bins per cell", n_pairs, derived));
        }

        let mut cells = Vec::with_capacity(n_cells);
        for (offset, chunk) in raw.chunks_exact(2 * n_pairs).enumerate() {
            let index = self.coordinates(offset)?;
            let mut values: Vec<f64> = chunk.iter().step_by(2).copied().collect();
            let mut errors: Vec<f64> = chunk.iter().skip(1).step_by(2).copied().collect();

            if unbounded_energy {
                values.push(values[0]);
                errors.push(errors[0]);
            }

            cells.push(Cell {
                object: index.object,
                segment: index.segment,
                multiplier: self.multiplier_flag.then_some(index.multiplier),
                cosine: [self.cosines[index.cosine], self.cosines[index.cosine + 1]],
                user_bin: self.user_bins,
                values,
                errors,
            });
        }

        debug!("N cells     = {}", cells.len());
        trace!("Cells       = {:?}", cells);
        self.cells = cells;
        Ok(())
    }

    // Listed edges have to agree with the declared counts
    fn check_edges(&self) -> Result<()> {
        let energies = self.energies.len();
        if energies != self.dimensions.energy_count {
            error!("Unexpected number of energy bins");
            return Err(self.mismatch("energy bin edges", self.dimensions.energy_count, energies));
        }

        let cosines = self.cosines.len();
        if self.dimensions.cosine_count > 1 && cosines != self.dimensions.cosine_count {
            error!("Unexpected number of cosine bins");
            return Err(self.mismatch("cosine bin edges", self.dimensions.cosine_count, cosines));
        }

        Ok(())
    }

    fn complete_edges(&mut self, unbounded_energy: bool) {
        if self.dimensions.cosine_count == 1 {
            self.cosines = vec![-1.0, 1.0];
        } else {
            self.cosines.insert(0, -1.0);
        }

        if unbounded_energy {
            self.energies.push(EnergyEdge::Value(UNBOUNDED_ENERGY));
        }
        self.energies.insert(0, EnergyEdge::Value(0.0));
        self.energies.push(EnergyEdge::Total);
    }

    fn mismatch(&self, context: &str, expected: usize, found: usize) -> Error {
        Error::DimensionMismatch {
            tally: self.id,
            context: context.to_string(),
            expected,
            found,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = &self.dimensions;
        write!(
            f,
            "Tally {:<6} {:<24} {:?} f{} s{} m{} c{} e{} t{} \"{}\"",
            self.id,
            self.describe_particles(),
            self.kind,
            d.object_count,
            d.segment_count,
            d.multiplier_count,
            d.cosine_count,
            d.energy_count,
            d.time_count,
            self.comment.trim()
        )
    }
}

/// Energy edges are either an upper bin edge or the `Total` marker
///
/// The stored energy edges always start with `0.0` and end with the
/// [EnergyEdge::Total] marker that lines up with the last value of a cell.
///
/// | Energy card  | Edges                                      |
/// | ------------ | ------------------------------------------ |
/// | None         | Value(0.0), Value(1e36), Total             |
/// | 1.0 20.0     | Value(0.0), Value(1.0), Value(20.0), Total |
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Serialize, Deserialize)]
pub enum EnergyEdge {
    /// The upper edge of a bin
    Value(f64),
    /// The 'Total' bin marker
    Total,
}

impl EnergyEdge {
    /// Check if the edge is the `Total` variant
    ///
    /// ```rust
    /// # use mctools_mctal::EnergyEdge;
    /// assert!(EnergyEdge::Total.is_total());
    /// assert!(!EnergyEdge::Value(2.0).is_total());
    /// ```
    #[inline]
    pub const fn is_total(&self) -> bool {
        matches!(*self, Self::Total)
    }

    /// Energy of the edge, `None` for the total marker
    #[inline]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Total => None,
        }
    }
}

impl std::fmt::Display for EnergyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", value.sci(5, 2)),
            Self::Total => write!(f, "Total"),
        }
    }
}

/// Types of detector tally
///
/// A tally header contains `tally <id> <i> <j> [<k>]`, where `j` is the type
/// of detector.
///
/// | Value | Description of type    |
/// | ----- | ---------------------- |
/// | 0     | None                   |
/// | 1     | Point                  |
/// | 2     | Ring                   |
/// | 3     | Pinhole                |
/// | 4     | TransmittedRectangular |
/// | 5     | TransmittedCylindrical |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyKind {
    #[default]
    /// None, generic tally type
    None = 0,
    /// Point detector tally
    Point = 1,
    /// Ring detector tally
    Ring = 2,
    /// Pinhole radiograph (FIP)
    Pinhole = 3,
    /// Transmitted image radiograph (rectangular grid, FIR),
    TransmittedRectangular = 4,
    /// Transmitted image radiograph (cylindrical grid, FIC)
    TransmittedCylindrical = 5,
}

impl TryFrom<i32> for TallyKind {
    type Error = i32;

    fn try_from(code: i32) -> core::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Point),
            2 => Ok(Self::Ring),
            3 => Ok(Self::Pinhole),
            4 => Ok(Self::TransmittedRectangular),
            5 => Ok(Self::TransmittedCylindrical),
            _ => Err(code),
        }
    }
}

/// Tally modifier
///
/// Optional last field of the tally header, for `*F` and `+F` tallies.
///
/// | Value | Modifier |
/// | ----- | -------- |
/// | 0     | None     |
/// | 1     | Star     |
/// | 2     | Plus     |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    /// No tally modifier, e.g. F4:n
    None = 0,
    /// For the `*` tally modifier, e.g. *F4:n
    Star = 1,
    /// For the `+` tally modifier, e.g. +F4:n
    Plus = 2,
}

impl TryFrom<i32> for Modifier {
    type Error = i32;

    fn try_from(code: i32) -> core::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Star),
            2 => Ok(Self::Plus),
            _ => Err(code),
        }
    }
}

/// Standard bin tags (i.e. `None`, `Total`, `Cumulative`)
///
/// | Tag example | Description                                 |
/// | ----------- | ------------------------------------------- |
/// | `e`         | plain energy bins                           |
/// | `et`        | includes a "`t`otal" bin in the count       |
/// | `ec`        | energy bins are `c`umulative                |
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BinKind {
    #[default]
    None,
    Total,
    Cumulative,
}

impl From<Option<char>> for BinKind {
    fn from(tag: Option<char>) -> Self {
        match tag {
            Some('t') => BinKind::Total,
            Some('c') => BinKind::Cumulative,
            _ => BinKind::None,
        }
    }
}

/// Tally fluctuation chart
///
/// The first line is the 9-field summary `tfc <n> <jtf>`:
///
/// - `n` is the number of sets of tally fluctuation data
/// - `jtf` is a list of 8 numbers, indices of the tally fluctuation chart bins
///
/// For example:
///
/// ```text
/// tfc    10       1       1       1       1       1       1       3       1
/// ```
///
/// Records follow on as many lines as needed as `<nps> <mean> <error> <fom>`
/// and are stored as [TfcResult]s.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tfc {
    /// Number of sets of tally fluctuation data
    pub n_records: u32,
    /// Region (cell, surface, detector) bin of the chart
    pub region_bin: u32,
    /// Flagged bin of the chart
    pub flagged_bin: u32,
    /// User bin of the chart
    pub user_bin: u32,
    /// Segment bin of the chart
    pub segment_bin: u32,
    /// Multiplier bin of the chart
    pub multiplier_bin: u32,
    /// Cosine bin of the chart
    pub cosine_bin: u32,
    /// Energy bin of the chart
    pub energy_bin: u32,
    /// Time bin of the chart
    pub time_bin: u32,

    /// Tally fluctuation data. i.e. nps, mean, error, figure of merit.
    pub results: Vec<TfcResult>,
}

impl Tfc {
    /// Number of values per record of the fluctuation series
    pub const RECORD_LENGTH: usize = 4;

    /// Summary line as a plain vector, in file order
    pub fn summary(&self) -> [u32; 9] {
        [
            self.n_records,
            self.region_bin,
            self.flagged_bin,
            self.user_bin,
            self.segment_bin,
            self.multiplier_bin,
            self.cosine_bin,
            self.energy_bin,
            self.time_bin,
        ]
    }
}

impl From<[u32; 9]> for Tfc {
    fn from(summary: [u32; 9]) -> Self {
        let [n_records, region_bin, flagged_bin, user_bin, segment_bin, multiplier_bin, cosine_bin, energy_bin, time_bin] =
            summary;
        Self {
            n_records,
            region_bin,
            flagged_bin,
            user_bin,
            segment_bin,
            multiplier_bin,
            cosine_bin,
            energy_bin,
            time_bin,
            results: Vec::new(),
        }
    }
}

/// Tally fluctuation chart record
///
/// `<nps> <mean> <error> <fom>`
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfcResult {
    /// Number of particles
    pub nps: u64,
    /// Average value
    pub value: f64,
    /// Relative uncertainty
    pub error: f64,
    /// Figure-of-Merit value
    pub fom: f64,
}

impl From<&[f64]> for TfcResult {
    fn from(record: &[f64]) -> Self {
        let get = |i: usize| record.get(i).copied().unwrap_or_default();
        Self {
            nps: get(0) as u64,
            value: get(1),
            error: get(2),
            fom: get(3),
        }
    }
}

impl TfcResult {
    /// Absolute error on the mean
    pub fn absolute_error(&self) -> f64 {
        self.value * self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // one object, one cosine bin, two energy edges
    fn declared() -> Tally {
        let mut tally = Tally::new(4);
        tally.objects = vec![10];
        tally.dimensions = Dimensions {
            object_count: 1,
            energy_count: 2,
            ..Default::default()
        };
        tally.energies = vec![EnergyEdge::Value(1.0), EnergyEdge::Value(20.0)];
        tally
    }

    #[test]
    fn reshape_single_cell() {
        let mut tally = declared();
        tally
            .reshape(&[10.0, 0.05, 5.0, 0.1, 15.0, 0.02])
            .unwrap();

        assert_eq!(
            tally.energies,
            vec![
                EnergyEdge::Value(0.0),
                EnergyEdge::Value(1.0),
                EnergyEdge::Value(20.0),
                EnergyEdge::Total
            ]
        );
        assert_eq!(tally.cosines, vec![-1.0, 1.0]);
        assert_eq!(tally.cells.len(), 1);

        let cell = tally.cell(0, 0, 0, 0).unwrap();
        assert_eq!(cell.values, vec![10.0, 5.0, 15.0]);
        assert_eq!(cell.errors, vec![0.05, 0.1, 0.02]);
        assert_eq!(cell.multiplier, None);
        assert_eq!(cell.total().unwrap().value, 15.0);
        assert!(!tally.multiplier_flag);
    }

    #[test]
    fn reshape_short_stream() {
        let mut tally = declared();
        let result = tally.reshape(&[10.0, 0.05, 5.0, 0.1, 15.0]);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn reshape_wrong_energy_bins() {
        // two cells worth of single-bin data
        let mut tally = declared();
        tally.dimensions.object_count = 2;
        tally.objects = vec![10, 20];
        let result = tally.reshape(&[1.0, 0.1, 2.0, 0.2, 3.0, 0.3, 4.0, 0.4]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn reshape_unbounded_energy() {
        let mut tally = Tally::new(14);
        tally.objects = vec![1, 2];
        tally.dimensions.object_count = 2;
        tally.reshape(&[1.0, 0.1, 2.0, 0.2]).unwrap();

        assert_eq!(tally.dimensions().energy_count, 1);
        assert_eq!(tally.energies.len(), 3);
        assert_eq!(tally.energies[1], EnergyEdge::Value(UNBOUNDED_ENERGY));
        assert_eq!(tally.cell(1, 0, 0, 0).unwrap().values, vec![2.0, 2.0]);
        assert_eq!(tally.cell(1, 0, 0, 0).unwrap().errors, vec![0.2, 0.2]);
    }

    #[test]
    fn reshape_cosine_and_multiplier_order() {
        let mut tally = Tally::new(1);
        tally.objects = vec![1];
        tally.dimensions = Dimensions {
            object_count: 1,
            multiplier_count: 2,
            cosine_count: 2,
            ..Default::default()
        };
        tally.cosines = vec![0.0, 1.0];

        // 4 cells of one pair each
        tally
            .reshape(&[1.0, 0.1, 2.0, 0.2, 3.0, 0.3, 4.0, 0.4])
            .unwrap();

        assert!(tally.multiplier_flag);
        assert_eq!(tally.cosines, vec![-1.0, 0.0, 1.0]);

        let cell = tally.cell(0, 0, 1, 0).unwrap();
        assert_eq!(cell.values[0], 3.0);
        assert_eq!(cell.multiplier, Some(1));
        assert_eq!(cell.cosine, [-1.0, 0.0]);

        let cell = tally.cell(0, 0, 0, 1).unwrap();
        assert_eq!(cell.values[0], 2.0);
        assert_eq!(cell.cosine, [0.0, 1.0]);
    }

    #[test]
    fn normalise_twice() {
        let mut tally = declared();
        tally.normalise();
        let first = tally.clone();
        tally.normalise();
        assert_eq!(tally, first);
        assert!(!tally.multiplier_flag);
        assert_eq!(tally.dimensions().time_count, 1);
    }

    #[test]
    fn cell_out_of_range() {
        let mut tally = declared();
        tally.reshape(&[10.0, 0.05, 5.0, 0.1, 15.0, 0.02]).unwrap();
        assert!(matches!(
            tally.cell(1, 0, 0, 0),
            Err(Error::BinOutOfRange { axis: "object", .. })
        ));
    }

    #[test]
    fn reshape_overflowing_bins() {
        let mut tally = declared();
        tally.dimensions.object_count = usize::MAX;
        tally.dimensions.segment_count = 2;
        let result = tally.reshape(&[10.0, 0.05, 5.0, 0.1, 15.0, 0.02]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 3,
                found: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn object_slice_without_cells() {
        // dimensions declared but never reshaped
        let mut tally = Tally::new(4);
        tally.dimensions.object_count = 2;
        tally.normalise();

        assert!(matches!(
            tally.cell(1, 0, 0, 0),
            Err(Error::BinOutOfRange { axis: "cell", .. })
        ));
        assert!(matches!(
            tally.cells_for_object(1),
            Err(Error::BinOutOfRange {
                axis: "cell",
                index: 1,
                count: 0
            })
        ));
    }

    #[test]
    fn tfc_summary_order() {
        let tfc = Tfc::from([5, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(tfc.n_records, 5);
        assert_eq!(tfc.time_bin, 8);
        assert_eq!(tfc.summary(), [5, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
