use std::fmt;
use std::error;

/// Error type for parsing and validating sequence-level data.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// A character was not recognized as one of A, C, G, T.
    InvalidNucleotide(char),

    /// A GC range with min > max, or bounds outside [0, 1].
    InvalidGcRange { min: f64, max: f64 },

    /// A folding window with min_sep >= max_sep or zero normalization.
    InvalidFoldingWindow(String),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNucleotide(c) => write!(f, "Invalid nucleotide: '{c}'"),
            Self::InvalidGcRange { min, max } => {
                write!(f, "Invalid GC range [{min}, {max}]: need 0 <= min <= max <= 1")
            }
            Self::InvalidFoldingWindow(msg) => write!(f, "Invalid folding window: {msg}"),
        }
    }
}

impl error::Error for SequenceError {}

