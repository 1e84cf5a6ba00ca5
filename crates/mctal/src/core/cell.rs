use serde::{Deserialize, Serialize};

/// Results for one combination of object, segment, multiplier, and cosine bin
///
/// Every cell holds the full energy spectrum for its bin combination. The
/// `values` and `errors` are aligned 1:1 and have one slot per energy bin plus
/// a final slot for the total over all energies.
///
/// For example, a cell with energy bins at 1 and 20 MeV:
///
/// ```text
///  vals
///    1.00000E+01 0.0500  5.00000E+00 0.1000  1.50000E+01 0.0200
/// ```
///
/// ```rust, ignore
/// Cell {
///     object: 0,
///     segment: 0,
///     multiplier: None,
///     cosine: [-1.0, 1.0],
///     user_bin: 0,
///     values: [10.0, 5.0, 15.0],
///     errors: [0.05, 0.1, 0.02],
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Index into the tally object list
    pub object: usize,
    /// Segment index
    pub segment: usize,
    /// Multiplier index, or `None` if the tally has no multiplier bins
    pub multiplier: Option<usize>,
    /// Lower and upper cosine edges of the bin
    pub cosine: [f64; 2],
    /// Declared user bin count, not used for addressing
    pub user_bin: usize,
    /// Tally values by energy bin, total last
    pub values: Vec<f64>,
    /// Relative errors by energy bin, total last
    pub errors: Vec<f64>,
}

impl Cell {
    /// Iterator over value/error pairs by energy bin, total last
    pub fn results(&self) -> impl Iterator<Item = TallyResult> + '_ {
        self.values
            .iter()
            .zip(self.errors.iter())
            .map(|(&value, &error)| TallyResult { value, error })
    }

    /// Result integrated over all energies
    pub fn total(&self) -> Option<TallyResult> {
        self.results().last()
    }
}

/// Tally result containing a value and relative error
///
/// All tally results are output as `<value>` `<error>` pairs. Each pair may be
/// viewed as a [TallyResult] to avoid indexing two arrays for data that should
/// be linked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TallyResult {
    /// Tally result value
    pub value: f64,
    /// Relative uncertainty
    pub error: f64,
}

impl TallyResult {
    /// Absolute error on the result
    ///
    /// For example:
    ///
    /// ```rust
    /// # use mctools_mctal::TallyResult;
    /// let result = TallyResult {
    ///     value: 50.0,
    ///     error: 0.10,
    /// };
    /// /// 10% relative error => 50.0 +/-5.0
    /// assert_eq!(result.absolute_error(), 5.0);
    /// ```
    pub fn absolute_error(&self) -> f64 {
        self.value * self.error
    }

    /// Relative error on the result
    ///
    /// The MCNP tally outputs are provided and stored as the relative
    /// uncertainty anyway, but having both methods makes intent explicit.
    pub fn relative_error(&self) -> f64 {
        self.error
    }
}
