//! Affinity scoring.
//!
//! The affinity of a sequence is a weighted sum of three components:
//!  - complementarity: position-wise matches with the target,
//!  - structure: the folding heuristic,
//!  - stability: closeness of the GC content to 0.5.
//!
//! The sum is capped at 1.0. There is no lower cap: with the default
//! weights every component is non-negative, custom weights may go below 0.
//!

use serde::Serialize;
use serde::Deserialize;
use sx_sequence::Candidate;
use sx_sequence::FoldingWindow;
use sx_sequence::NucleotideVec;
use sx_sequence::gc_fraction;

use crate::Ranked;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffinityWeights {
    pub complementarity: f64,
    pub structure: f64,
    pub stability: f64,
}

impl Default for AffinityWeights {
    fn default() -> Self {
        AffinityWeights {
            complementarity: 0.6,
            structure: 0.25,
            stability: 0.15,
        }
    }
}

/// Transient view of a candidate during one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub sequence: NucleotideVec,
    pub score: f64,
    pub gc: f64,
    pub folding: f64,
}

impl Ranked for ScoredCandidate {
    fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AffinityScorer {
    target: Option<NucleotideVec>,
    window: FoldingWindow,
    weights: AffinityWeights,
}

impl AffinityScorer {
    pub fn new(target: Option<NucleotideVec>) -> Self {
        AffinityScorer {
            target,
            window: FoldingWindow::SELEX,
            weights: AffinityWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: AffinityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn target(&self) -> Option<&NucleotideVec> {
        self.target.as_ref()
    }

    pub fn weights(&self) -> &AffinityWeights {
        &self.weights
    }

    /// Matches over the shorter of both lengths, divided by the target
    /// length. Zero without a (non-empty) target.
    pub fn complementarity(&self, seq: &NucleotideVec) -> f64 {
        match &self.target {
            Some(target) if !target.is_empty() => {
                let overlap = seq.iter()
                    .zip(target.iter())
                    .filter(|(s, t)| s == t)
                    .count();
                overlap as f64 / target.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn score(&self, seq: &NucleotideVec) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;
        score += w.complementarity * self.complementarity(seq);
        score += w.structure * self.window.estimate(seq);
        score += w.stability * (1.0 - (gc_fraction(seq) - 0.5).abs());
        score.min(1.0)
    }

    /// Score every library member, in library order.
    pub fn score_library(&self, library: &[Candidate]) -> Vec<ScoredCandidate> {
        library.iter()
            .map(|c| ScoredCandidate {
                sequence: c.sequence().clone(),
                score: self.score(c.sequence()),
                gc: c.gc_content(),
                folding: c.folding_score(),
            })
            .collect()
    }
}
