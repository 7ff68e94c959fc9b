//! Amplification as biased resampling.
//!
//! The selected sequences are mutated once, pooled together with their
//! unmutated originals, resampled back to the input count, and finally run
//! through the generator's pool mode (GC filter, second resampling,
//! metadata). Both resampling stages draw with replacement.
//!

use rand::Rng;
use rand::seq::IndexedRandom;
use sx_sequence::GcRange;
use sx_sequence::Library;
use sx_sequence::NucleotideVec;

use crate::LibraryGenerator;
use crate::SelexError;
use crate::mutate;

pub fn amplify<R: Rng + ?Sized>(
    sequences: &[NucleotideVec],
    rate: f64,
    gc_range: &GcRange,
    generator: &LibraryGenerator,
    rng: &mut R,
) -> Result<Library, SelexError> {
    let n = sequences.len();
    if n == 0 {
        return Err(SelexError::EmptyCandidatePool { pool_size: 0, gc_range: *gc_range });
    }

    let mut bag: Vec<NucleotideVec> = sequences.iter()
        .map(|seq| mutate(seq, rate, gc_range, rng))
        .collect();
    bag.extend_from_slice(sequences);

    let resampled: Vec<NucleotideVec> = (0..n)
        .filter_map(|_| bag.choose(rng).cloned())
        .collect();

    generator.generate_from_pool(&resampled, n, gc_range, rng)
}
