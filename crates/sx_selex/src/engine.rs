//! The SELEX round engine.
//!
//! A run validates its configuration, generates the initial library and
//! then performs exactly `num_rounds` rounds of
//! score → select → amplify → record. The amplified library of one round
//! is moved into the next. Only the selected count survives a round, so
//! the library shrinks unless the selection pressure compensates.
//!

use ahash::AHashSet;
use log::info;
use rand::Rng;
use serde::Serialize;
use serde::Deserialize;
use sx_sequence::Library;
use sx_sequence::NucleotideVec;

use crate::AffinityScorer;
use crate::LibraryGenerator;
use crate::RecoveryPolicy;
use crate::SelexConfig;
use crate::SelexError;
use crate::amplify;
use crate::select_binders;

/// Summary of one completed round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    /// Mean score of the selected candidates.
    pub avg_score: f64,
    /// Best selected sequence.
    pub top_sequence: NucleotideVec,
    /// Distinct sequences in the amplified library.
    pub diversity: usize,
}

#[derive(Debug, Clone)]
pub struct SelexEngine {
    scorer: AffinityScorer,
    recovery: RecoveryPolicy,
    round_history: Vec<RoundRecord>,
}

impl SelexEngine {
    pub fn new(target: Option<NucleotideVec>) -> Self {
        SelexEngine {
            scorer: AffinityScorer::new(target),
            recovery: RecoveryPolicy::default(),
            round_history: Vec::new(),
        }
    }

    pub fn with_recovery(mut self, recovery: RecoveryPolicy) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn target(&self) -> Option<&NucleotideVec> {
        self.scorer.target()
    }

    pub fn scorer(&self) -> &AffinityScorer {
        &self.scorer
    }

    pub fn recovery(&self) -> &RecoveryPolicy {
        &self.recovery
    }

    /// Records of the most recent run, ordered by round.
    pub fn round_history(&self) -> &[RoundRecord] {
        &self.round_history
    }

    /// Run the full protocol and return the final library.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        config: &SelexConfig,
        rng: &mut R,
    ) -> Result<Library, SelexError> {
        config.validate()?;
        let generator = LibraryGenerator::from(config);
        self.round_history.clear();

        let mut library = generator.generate(
            config.library_size,
            config.seq_length,
            &config.gc_range,
            rng,
        )?;
        info!(
            "Initial library: {} sequences of length {}, GC in {}.",
            library.len(), config.seq_length, config.gc_range
        );

        for round in 1..=config.num_rounds {
            library = self.run_round(round, library, config, rng)?;
        }
        Ok(library)
    }

    /// Perform one round on `library` and append its record. `config` is
    /// validated first, as in `run`.
    pub fn run_round<R: Rng + ?Sized>(
        &mut self,
        round: usize,
        library: Library,
        config: &SelexConfig,
        rng: &mut R,
    ) -> Result<Library, SelexError> {
        config.validate()?;
        let generator = LibraryGenerator::from(config);

        let scored = self.scorer.score_library(&library);
        let mut selected = select_binders(scored, config.selection_pressure);
        if selected.is_empty() {
            selected = self.recovery.recover(
                round,
                config.seq_length,
                &config.gc_range,
                &generator,
                rng,
            )?;
        }

        let sequences: Vec<NucleotideVec> = selected.iter()
            .map(|s| s.sequence.clone())
            .collect();
        let amplified = amplify(
            &sequences,
            config.mutation_rate,
            &config.gc_range,
            &generator,
            rng,
        )?;

        let avg_score = selected.iter().map(|s| s.score).sum::<f64>() / selected.len() as f64;
        let diversity = amplified.iter()
            .map(|c| c.sequence())
            .collect::<AHashSet<_>>()
            .len();
        let record = RoundRecord {
            round,
            avg_score,
            top_sequence: selected[0].sequence.clone(),
            diversity,
        };
        info!(
            "Round {}: average score {:.3}, {} unique sequences, top sequence {}",
            record.round, record.avg_score, record.diversity, record.top_sequence
        );
        self.round_history.push(record);
        Ok(amplified)
    }
}
