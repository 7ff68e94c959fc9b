//! Library generation.
//!
//! Fresh mode draws uniform-random sequences and keeps those passing the GC
//! filter (bounded rejection sampling). Pool mode resamples, with
//! replacement, the GC-valid members of an existing pool.
//!

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use sx_sequence::Candidate;
use sx_sequence::FoldingWindow;
use sx_sequence::GcRange;
use sx_sequence::Library;
use sx_sequence::NucleotideVec;

use crate::SelexConfig;
use crate::SelexError;
use crate::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryGenerator {
    window: FoldingWindow,
    max_attempts: usize,
}

impl Default for LibraryGenerator {
    fn default() -> Self {
        LibraryGenerator::new(FoldingWindow::SELEX, DEFAULT_MAX_ATTEMPTS)
    }
}

impl From<&SelexConfig> for LibraryGenerator {
    fn from(config: &SelexConfig) -> Self {
        LibraryGenerator::new(FoldingWindow::SELEX, config.max_attempts)
    }
}

impl LibraryGenerator {
    pub fn new(window: FoldingWindow, max_attempts: usize) -> Self {
        LibraryGenerator { window, max_attempts }
    }

    pub fn window(&self) -> &FoldingWindow {
        &self.window
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Wrap a sequence into a candidate with fresh metadata.
    pub fn candidate(&self, sequence: NucleotideVec) -> Candidate {
        Candidate::new(sequence, &self.window)
    }

    /// Draw one random sequence of `length` that passes the GC filter. A
    /// range no GC count of `length` can satisfy fails without drawing.
    pub fn random_sequence<R: Rng + ?Sized>(
        &self,
        length: usize,
        gc_range: &GcRange,
        rng: &mut R,
    ) -> Result<NucleotideVec, SelexError> {
        if length == 0 {
            return Err(SelexError::invalid("seq_length", "must be positive"));
        }
        if !gc_range.is_reachable(length) {
            return Err(SelexError::UnreachableGCConstraint {
                length,
                gc_range: *gc_range,
                attempts: 0,
            });
        }
        for _ in 0..self.max_attempts {
            let seq = NucleotideVec::random(length, rng);
            if gc_range.accepts(&seq) {
                return Ok(seq);
            }
        }
        Err(SelexError::UnreachableGCConstraint {
            length,
            gc_range: *gc_range,
            attempts: self.max_attempts,
        })
    }

    /// Fresh mode: `size` random candidates of `length` within `gc_range`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        size: usize,
        length: usize,
        gc_range: &GcRange,
        rng: &mut R,
    ) -> Result<Library, SelexError> {
        let mut library = Vec::with_capacity(size);
        while library.len() < size {
            let seq = self.random_sequence(length, gc_range, rng)?;
            library.push(self.candidate(seq));
        }
        debug!("Generated {} fresh sequences of length {}.", size, length);
        Ok(library)
    }

    /// Pool mode: sample `size` GC-valid members of `pool` with replacement.
    pub fn generate_from_pool<R: Rng + ?Sized>(
        &self,
        pool: &[NucleotideVec],
        size: usize,
        gc_range: &GcRange,
        rng: &mut R,
    ) -> Result<Library, SelexError> {
        let valid: Vec<&NucleotideVec> = pool.iter()
            .filter(|seq| gc_range.accepts(seq))
            .collect();

        if valid.is_empty() {
            return Err(SelexError::EmptyCandidatePool {
                pool_size: pool.len(),
                gc_range: *gc_range,
            });
        }
        debug!("Resampling {} of {} pooled sequences ({} GC-valid).", size, pool.len(), valid.len());

        let mut library = Vec::with_capacity(size);
        for _ in 0..size {
            // `valid` is non-empty, so choose never returns None.
            if let Some(&seq) = valid.choose(rng) {
                library.push(self.candidate(seq.clone()));
            }
        }
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sx_sequence::gc_fraction;

    fn seq(s: &str) -> NucleotideVec {
        NucleotideVec::try_from(s).unwrap()
    }

    #[test]
    fn test_fresh_library_sizes_and_constraints() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = LibraryGenerator::default();
        let gc_range = GcRange::new(0.4, 0.6).unwrap();

        let library = generator.generate(50, 25, &gc_range, &mut rng).unwrap();
        assert_eq!(library.len(), 50);
        for c in &library {
            assert_eq!(c.len(), 25);
            assert_eq!(c.gc_content(), c.sequence().gc_count() as f64 / 25.0);
            assert!(gc_range.contains(c.gc_content()));
            assert_eq!(c.folding_score(), FoldingWindow::SELEX.estimate(c.sequence()));
        }
    }

    #[test]
    fn test_fresh_generation_is_reproducible() {
        let generator = LibraryGenerator::default();
        let gc_range = GcRange::default();
        let a = generator.generate(10, 20, &gc_range, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generator.generate(10, 20, &gc_range, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unreachable_gc_range_fails() {
        let mut rng = StdRng::seed_from_u64(2);
        let generator = LibraryGenerator::new(FoldingWindow::SELEX, 500);
        // No 3-nt sequence has GC content in [0.45, 0.55].
        let gc_range = GcRange::new(0.45, 0.55).unwrap();
        let before = rng.clone();
        let err = generator.generate(5, 3, &gc_range, &mut rng).unwrap_err();
        assert_eq!(err, SelexError::UnreachableGCConstraint {
            length: 3,
            gc_range,
            attempts: 0,
        });
        assert_eq!(rng, before);
    }

    #[test]
    fn test_attempt_ceiling_is_enforced() {
        let mut rng = StdRng::seed_from_u64(2);
        let generator = LibraryGenerator::new(FoldingWindow::SELEX, 50);
        // Reachable (all G/C) but only 1 in 2^20 draws qualifies.
        let gc_range = GcRange::new(1.0, 1.0).unwrap();
        let err = generator.generate(1, 20, &gc_range, &mut rng).unwrap_err();
        assert_eq!(err, SelexError::UnreachableGCConstraint {
            length: 20,
            gc_range,
            attempts: 50,
        });
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = LibraryGenerator::default()
            .generate(1, 0, &GcRange::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SelexError::InvalidConfiguration { field: "seq_length", .. }));
    }

    #[test]
    fn test_pool_mode_filters_and_resamples() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = LibraryGenerator::default();
        let gc_range = GcRange::new(0.4, 0.6).unwrap();
        let pool = vec![seq("GCGATA"), seq("AAAAAA"), seq("GGGGGG"), seq("ACGTAC")];

        let library = generator.generate_from_pool(&pool, 12, &gc_range, &mut rng).unwrap();
        assert_eq!(library.len(), 12);
        for c in &library {
            let s = c.sequence().to_string();
            assert!(s == "GCGATA" || s == "ACGTAC");
            assert_eq!(c.gc_content(), gc_fraction(c.sequence()));
        }
    }

    #[test]
    fn test_pool_mode_samples_with_replacement() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = vec![seq("GCAT")];
        let library = LibraryGenerator::default()
            .generate_from_pool(&pool, 4, &GcRange::default(), &mut rng)
            .unwrap();
        assert_eq!(library.len(), 4);
        assert!(library.iter().all(|c| c.sequence() == &pool[0]));
    }

    #[test]
    fn test_pool_mode_without_valid_entries_fails() {
        let mut rng = StdRng::seed_from_u64(6);
        let generator = LibraryGenerator::default();
        let gc_range = GcRange::new(0.4, 0.6).unwrap();

        let pool = vec![seq("AAAAAA"), seq("GGGGGG")];
        let err = generator.generate_from_pool(&pool, 3, &gc_range, &mut rng).unwrap_err();
        assert_eq!(err, SelexError::EmptyCandidatePool { pool_size: 2, gc_range });

        let err = generator.generate_from_pool(&[], 3, &gc_range, &mut rng).unwrap_err();
        assert_eq!(err, SelexError::EmptyCandidatePool { pool_size: 0, gc_range });
    }
}
