//! GC-preserving point mutation.
//!
//! Each position is visited once, left to right. With probability `rate` a
//! substitution is attempted: the three other bases are tried in random
//! order and the first one whose whole-sequence GC fraction stays within
//! the range is taken. If none fits, the position keeps its base. The GC
//! check sees earlier substitutions, so the outcome depends on order.
//!

use rand::Rng;
use rand::seq::SliceRandom;
use sx_sequence::ALPHABET;
use sx_sequence::GcRange;
use sx_sequence::NucleotideVec;

pub fn mutate<R: Rng + ?Sized>(
    sequence: &NucleotideVec,
    rate: f64,
    gc_range: &GcRange,
    rng: &mut R,
) -> NucleotideVec {
    let mut seq = sequence.clone();
    let length = seq.len();
    let mut gc_count = seq.gc_count();

    for i in 0..length {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let current = seq[i];
        let mut options: Vec<_> = ALPHABET.into_iter()
            .filter(|&n| n != current)
            .collect();
        options.shuffle(rng);

        let base_count = gc_count - usize::from(current.is_gc());
        let accepted = options.into_iter()
            .find(|n| gc_range.accepts_counts(base_count + usize::from(n.is_gc()), length));
        if let Some(n) = accepted {
            seq[i] = n;
            gc_count = base_count + usize::from(n.is_gc());
        }
    }
    seq
}
