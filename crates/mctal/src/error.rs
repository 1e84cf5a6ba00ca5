//! Result and Error types for the mctal module

/// Type alias for `Result<T, mctal::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `mctools-mctal`
///
/// Any parse failure aborts the whole document, so a [Mctal](crate::Mctal) is
/// only ever returned complete. Line numbers are 1-based.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialize/deserialize a binary archive
    #[error("failed binary (de)serialization")]
    Binary(#[from] Box<bincode::ErrorKind>),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Malformed line, bad token, or a field out of order
    #[error("line {line}: expected {expected}, found {found:?}")]
    Format {
        line: usize,
        expected: String,
        found: String,
    },

    /// The file ended while a field was still expected
    #[error("line {line}: unexpected end of file, expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    /// Declared bin counts disagree with the data that follows them
    #[error("tally {tally}: inconsistent {context} (expected {expected}, found {found})")]
    DimensionMismatch {
        tally: u32,
        context: String,
        expected: usize,
        found: usize,
    },

    /// Bin coordinate outside of the declared range of its axis
    #[error("{axis} bin {index} out of range (count {count})")]
    BinOutOfRange {
        axis: &'static str,
        index: usize,
        count: usize,
    },

    /// Requested tally is not in the file
    #[error("tally {0} not found")]
    TallyNotFound(u32),

    /// Archive was not written by a compatible version of this crate
    #[error("unsupported archive (found {found:?}, supported {supported:?})")]
    UnsupportedArchive { found: String, supported: String },
}

impl Error {
    /// Shorthand for a [Error::Format] at a 0-based line index
    pub(crate) fn format(index: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Format {
            line: index + 1,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
