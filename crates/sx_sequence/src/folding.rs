//! Sliding-window folding heuristic.
//!
//! This is a pseudo base-pairing score, not a thermodynamic model: every
//! Watson-Crick complementary pair (i, j) with `min_sep <= j - i < max_sep`
//! contributes `1 / (j - i)`, so closer pairs (tighter hairpin loops) weigh
//! more. The sum is divided by a normalization constant.
//!

use serde::Serialize;
use serde::Deserialize;

use crate::NucleotideVec;
use crate::SequenceError;

/// Pair-separation window `[min_sep, max_sep)` and normalization constant.
/// Deserialization goes through `FoldingWindow::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindowRecord")]
pub struct FoldingWindow {
    min_sep: usize,
    max_sep: usize,
    normalization: f64,
}

impl FoldingWindow {
    /// Window of the single-shot aptamer generator: (3, 15), unnormalized.
    pub const GENERATOR: FoldingWindow = FoldingWindow {
        min_sep: 3,
        max_sep: 15,
        normalization: 1.0,
    };

    /// Window of the SELEX engine: (4, 20), normalized by 10.
    pub const SELEX: FoldingWindow = FoldingWindow {
        min_sep: 4,
        max_sep: 20,
        normalization: 10.0,
    };

    pub fn new(min_sep: usize, max_sep: usize, normalization: f64) -> Result<Self, SequenceError> {
        if min_sep == 0 || min_sep >= max_sep {
            return Err(SequenceError::InvalidFoldingWindow(format!(
                "need 0 < min_sep < max_sep, got ({min_sep}, {max_sep})"
            )));
        }
        if !(normalization.is_finite() && normalization > 0.0) {
            return Err(SequenceError::InvalidFoldingWindow(format!(
                "normalization must be positive, got {normalization}"
            )));
        }
        Ok(FoldingWindow { min_sep, max_sep, normalization })
    }

    pub fn min_sep(&self) -> usize {
        self.min_sep
    }

    pub fn max_sep(&self) -> usize {
        self.max_sep
    }

    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Folding score of `seq` (always >= 0).
    pub fn estimate(&self, seq: &NucleotideVec) -> f64 {
        let n = seq.len();
        let mut score = 0.0;
        for i in 0..n {
            let lo = i.saturating_add(self.min_sep);
            let hi = i.saturating_add(self.max_sep).min(n);
            for j in lo..hi {
                if seq[i].pairs_with(seq[j]) {
                    score += 1.0 / (j - i) as f64;
                }
            }
        }
        score / self.normalization
    }
}

impl Default for FoldingWindow {
    fn default() -> Self {
        FoldingWindow::SELEX
    }
}

#[derive(Deserialize)]
struct WindowRecord {
    min_sep: usize,
    max_sep: usize,
    normalization: f64,
}

impl TryFrom<WindowRecord> for FoldingWindow {
    type Error = SequenceError;

    fn try_from(record: WindowRecord) -> Result<Self, Self::Error> {
        FoldingWindow::new(record.min_sep, record.max_sep, record.normalization)
    }
}
