//! What a round does when its selection comes back empty.
//!
//! Selection only returns nothing for an empty library. The default policy
//! substitutes a single freshly generated candidate with a fixed score and
//! logs a warning, so the run continues.
//!

use log::warn;
use rand::Rng;
use serde::Serialize;
use serde::Deserialize;
use sx_sequence::GcRange;

use crate::LibraryGenerator;
use crate::ScoredCandidate;
use crate::SelexError;

/// Score assigned to the fallback candidate.
pub const FALLBACK_SCORE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RecoveryPolicy {
    /// Substitute one fresh candidate with the given score.
    FreshCandidate { score: f64 },
    /// Surface `SelexError::EmptySelection`.
    Fail,
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        RecoveryPolicy::FreshCandidate { score: FALLBACK_SCORE }
    }
}

impl RecoveryPolicy {
    /// Produce the replacement selection for `round`.
    pub fn recover<R: Rng + ?Sized>(
        &self,
        round: usize,
        length: usize,
        gc_range: &GcRange,
        generator: &LibraryGenerator,
        rng: &mut R,
    ) -> Result<Vec<ScoredCandidate>, SelexError> {
        match *self {
            RecoveryPolicy::FreshCandidate { score } => {
                warn!("No binders found in round {round}; continuing with one fresh sequence.");
                let candidate = generator.candidate(generator.random_sequence(length, gc_range, rng)?);
                Ok(vec![ScoredCandidate {
                    score,
                    gc: candidate.gc_content(),
                    folding: candidate.folding_score(),
                    sequence: candidate.into_sequence(),
                }])
            }
            RecoveryPolicy::Fail => Err(SelexError::EmptySelection { round }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fresh_candidate_fallback() {
        let mut rng = StdRng::seed_from_u64(41);
        let gc_range = GcRange::default();
        let fallback = RecoveryPolicy::default()
            .recover(2, 15, &gc_range, &LibraryGenerator::default(), &mut rng)
            .unwrap();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].score, FALLBACK_SCORE);
        assert_eq!(fallback[0].sequence.len(), 15);
        assert!(gc_range.contains(fallback[0].gc));
    }

    #[test]
    fn test_fail_policy() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = RecoveryPolicy::Fail
            .recover(3, 15, &GcRange::default(), &LibraryGenerator::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, SelexError::EmptySelection { round: 3 });
    }
}
