use std::error;
use std::fmt;

/// Error returned when simulation parameters violate their constraints.
///
/// Raised synchronously by [`DriftParameters::new`](crate::DriftParameters::new),
/// before any sampling occurs. Once parameters validate, the drift recurrence
/// itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    /// Population size must be at least one diploid individual (and small
    /// enough that 2N stays representable).
    PopulationSize(u64),
    /// At least one generation (the initial one) must be produced.
    Generations(usize),
    /// Initial allele count outside `[0, 2N]`.
    InitialCount {
        /// The count that was requested
        count: u64,
        /// Total allele copies in the population (2N)
        allele_copies: u64,
    },
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PopulationSize(n) => {
                write!(f, "Invalid population size: {n} (must be at least 1)")
            }
            Self::Generations(t) => {
                write!(f, "Invalid generation count: {t} (must be at least 1)")
            }
            Self::InitialCount {
                count,
                allele_copies,
            } => {
                write!(
                    f,
                    "Invalid initial allele count: {count} (must be between 0 and {allele_copies})"
                )
            }
        }
    }
}

impl error::Error for InvalidParameter {}

/// Errors that can occur while writing or reading trajectory files.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failure
    Io(std::io::Error),
    /// Malformed tabular data
    Csv(csv::Error),
    /// A field could not be parsed as an allele count
    Parse {
        /// 1-based line number in the file (header is line 1)
        line: usize,
        /// The offending field contents
        value: String,
    },
    /// The file contained a header but no data rows, or no trajectories
    /// were supplied for writing
    Empty,
    /// Replicate trajectories of unequal length cannot share one table
    LengthMismatch { expected: usize, found: usize },
    /// A data row whose column count differs from the header's
    ColumnMismatch {
        /// 1-based line number in the file (header is line 1)
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Csv(e) => write!(f, "Tabular format error: {e}"),
            Self::Parse { line, value } => {
                write!(f, "Invalid allele count '{value}' on line {line}")
            }
            Self::Empty => write!(f, "No trajectory data"),
            Self::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Trajectory length mismatch: expected {expected} generations, found {found}"
                )
            }
            Self::ColumnMismatch {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Line {line} has {found} columns, expected {expected}"
                )
            }
        }
    }
}

impl error::Error for StorageError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for StorageError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
