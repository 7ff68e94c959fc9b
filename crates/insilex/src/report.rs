//! JSON snapshot of a finished run.

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::Deserialize;
use sx_sequence::Candidate;
use sx_selex::RoundRecord;
use sx_selex::ScoredCandidate;
use sx_selex::SelexEngine;

/// Top candidates of the final library plus the round history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelexReport {
    pub top_aptamers: Vec<ScoredCandidate>,
    pub round_history: Vec<RoundRecord>,
}

impl SelexReport {
    /// Re-score `library` with the engine's scorer and keep the best `top_k`.
    pub fn new(engine: &SelexEngine, library: &[Candidate], top_k: usize) -> Self {
        let mut top_aptamers = engine.scorer().score_library(library);
        top_aptamers.sort_by(|a, b| b.score.total_cmp(&a.score));
        top_aptamers.truncate(top_k);
        SelexReport {
            top_aptamers,
            round_history: engine.round_history().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
