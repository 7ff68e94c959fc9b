//! Single-shot aptamer generation and evaluation.
//!
//! Independent of the round engine: `generate_aptamers` draws a batch of
//! candidates (from scratch or as variations of a seed sequence) and
//! `evaluate_aptamer` rates a sequence against desired properties. Folding
//! scores here use `FoldingWindow::GENERATOR`.
//!

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use serde::Deserialize;
use sx_sequence::ALPHABET;
use sx_sequence::FoldingWindow;
use sx_sequence::GcRange;
use sx_sequence::NucleotideVec;
use sx_sequence::gc_fraction;

use crate::DEFAULT_MAX_ATTEMPTS;
use crate::LibraryGenerator;
use crate::SelexError;

/// Per-position substitution probability for seed variations.
pub const DEFAULT_VARIATION_RATE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AptamerRequest {
    pub length: usize,
    pub count: usize,
    pub gc_range: GcRange,
    /// If set, every aptamer is a variation of this sequence and neither
    /// `length` nor `gc_range` apply.
    pub seed_sequence: Option<NucleotideVec>,
    pub variation_rate: f64,
    pub max_attempts: usize,
}

impl Default for AptamerRequest {
    fn default() -> Self {
        AptamerRequest {
            length: 30,
            count: 10,
            gc_range: GcRange::default(),
            seed_sequence: None,
            variation_rate: DEFAULT_VARIATION_RATE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AptamerRequest {
    pub fn validate(&self) -> Result<(), SelexError> {
        self.gc_range.validate()?;
        if !(0.0..=1.0).contains(&self.variation_rate) {
            return Err(SelexError::invalid(
                "variation_rate",
                format!("{} is not in [0, 1]", self.variation_rate),
            ));
        }
        match &self.seed_sequence {
            Some(seed) if seed.is_empty() => Err(SelexError::invalid("seed_sequence", "must not be empty")),
            None if self.length == 0 => Err(SelexError::invalid("length", "must be positive")),
            None if self.max_attempts == 0 => Err(SelexError::invalid("max_attempts", "must be positive")),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptamerProperties {
    pub sequence: NucleotideVec,
    pub length: usize,
    pub gc_content: f64,
    pub folding_score: f64,
}

impl From<NucleotideVec> for AptamerProperties {
    fn from(sequence: NucleotideVec) -> Self {
        AptamerProperties {
            length: sequence.len(),
            gc_content: gc_fraction(&sequence),
            folding_score: FoldingWindow::GENERATOR.estimate(&sequence),
            sequence,
        }
    }
}

pub fn generate_aptamers<R: Rng + ?Sized>(
    request: &AptamerRequest,
    rng: &mut R,
) -> Result<Vec<AptamerProperties>, SelexError> {
    request.validate()?;
    let generator = LibraryGenerator::new(FoldingWindow::GENERATOR, request.max_attempts);

    let mut aptamers = Vec::with_capacity(request.count);
    for _ in 0..request.count {
        let sequence = match &request.seed_sequence {
            Some(seed) => vary(seed, request.variation_rate, rng),
            None => generator.random_sequence(request.length, &request.gc_range, rng)?,
        };
        aptamers.push(AptamerProperties::from(sequence));
    }
    Ok(aptamers)
}

/// Unconstrained variation: each position is replaced, with probability
/// `rate`, by one of the three other bases.
pub fn vary<R: Rng + ?Sized>(seed: &NucleotideVec, rate: f64, rng: &mut R) -> NucleotideVec {
    let mut variant = seed.clone();
    for n in variant.iter_mut() {
        if rng.random::<f64>() < rate {
            let current = *n;
            let options: Vec<_> = ALPHABET.into_iter().filter(|&o| o != current).collect();
            if let Some(&o) = options.choose(rng) {
                *n = o;
            }
        }
    }
    variant
}

/// Desired properties for `evaluate_aptamer`. Unset fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetProperties {
    pub target_length: Option<usize>,
    pub target_gc_content: Option<f64>,
}

/// Mean of the length score, the GC score and the capped folding score.
pub fn evaluate_aptamer(sequence: &NucleotideVec, target: &TargetProperties) -> f64 {
    let mut scores = Vec::with_capacity(3);

    if let Some(tl) = target.target_length.filter(|&tl| tl > 0) {
        let diff = (sequence.len() as f64 - tl as f64).abs();
        scores.push(1.0 - diff / tl as f64);
    }
    if let Some(tgc) = target.target_gc_content {
        scores.push(1.0 - (gc_fraction(sequence) - tgc).abs());
    }
    scores.push(FoldingWindow::GENERATOR.estimate(sequence).min(1.0));

    scores.iter().sum::<f64>() / scores.len() as f64
}
