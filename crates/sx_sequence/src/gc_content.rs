//! GC content and the GC filter.
//!
//! All GC fractions in insilex are computed as `gc_count / length` by
//! `gc_fraction_of`, so that the filter, the mutator and cached candidate
//! metadata agree exactly.
//!

use std::fmt;
use serde::Serialize;
use serde::Deserialize;

use crate::NucleotideVec;
use crate::SequenceError;

/// GC fraction from a count and a length. An empty sequence has fraction 0.
pub fn gc_fraction_of(gc_count: usize, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    gc_count as f64 / length as f64
}

/// Fraction of G and C bases in `seq`.
pub fn gc_fraction(seq: &NucleotideVec) -> f64 {
    gc_fraction_of(seq.gc_count(), seq.len())
}

/// Inclusive GC-content interval [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcRange {
    min: f64,
    max: f64,
}

impl GcRange {
    pub fn new(min: f64, max: f64) -> Result<Self, SequenceError> {
        let range = GcRange { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Check the bounds, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), SequenceError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && 0.0 <= self.min
            && self.min <= self.max
            && self.max <= 1.0;
        if ok {
            Ok(())
        } else {
            Err(SequenceError::InvalidGcRange { min: self.min, max: self.max })
        }
    }

    /// True iff `fraction` lies within [min, max].
    pub fn contains(&self, fraction: f64) -> bool {
        self.min <= fraction && fraction <= self.max
    }

    /// The GC filter: true iff the GC fraction of `seq` is within range.
    pub fn accepts(&self, seq: &NucleotideVec) -> bool {
        self.contains(gc_fraction(seq))
    }

    /// Same as `accepts`, for a sequence summarized by its GC count.
    pub fn accepts_counts(&self, gc_count: usize, length: usize) -> bool {
        self.contains(gc_fraction_of(gc_count, length))
    }

    /// Returns true if at least one GC count of a `length`-nt sequence
    /// falls within the range.
    pub fn is_reachable(&self, length: usize) -> bool {
        (0..=length).any(|gc| self.accepts_counts(gc, length))
    }
}

impl Default for GcRange {
    fn default() -> Self {
        GcRange { min: 0.4, max: 0.6 }
    }
}

impl fmt::Display for GcRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}
