use std::fmt;
use std::error;

use sx_sequence::GcRange;
use sx_sequence::SequenceError;

/// Error type for library generation and SELEX runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SelexError {
    /// A run parameter is out of its valid range.
    InvalidConfiguration { field: &'static str, reason: String },

    /// Fresh generation gave up after `attempts` consecutive rejections
    /// (0 if no GC count of `length` lies within the range).
    UnreachableGCConstraint { length: usize, gc_range: GcRange, attempts: usize },

    /// Pool resampling found no sequence within the GC range.
    EmptyCandidatePool { pool_size: usize, gc_range: GcRange },

    /// Selection came back empty and the recovery policy is `Fail`.
    EmptySelection { round: usize },

    /// Invalid sequence input, e.g. a target with foreign symbols.
    Sequence(SequenceError),
}

impl SelexError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SelexError::InvalidConfiguration { field, reason: reason.into() }
    }
}

impl fmt::Display for SelexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for `{field}`: {reason}")
            }
            Self::UnreachableGCConstraint { length, gc_range, attempts } => write!(
                f,
                "No sequence of length {length} with GC content in {gc_range} after {attempts} attempts"
            ),
            Self::EmptyCandidatePool { pool_size, gc_range } => write!(
                f,
                "None of the {pool_size} pooled sequences has GC content in {gc_range}"
            ),
            Self::EmptySelection { round } => write!(f, "Selection in round {round} is empty"),
            Self::Sequence(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for SelexError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Sequence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SequenceError> for SelexError {
    fn from(e: SequenceError) -> Self {
        match e {
            SequenceError::InvalidGcRange { .. } => SelexError::invalid("gc_range", e.to_string()),
            SequenceError::InvalidFoldingWindow(_) => SelexError::invalid("folding_window", e.to_string()),
            other => SelexError::Sequence(other),
        }
    }
}
