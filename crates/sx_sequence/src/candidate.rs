use serde::Serialize;
use serde::Deserialize;

use crate::FoldingWindow;
use crate::NucleotideVec;
use crate::gc_fraction;

/// A library member: a sequence together with its GC content and folding
/// score. The metadata is derived from the sequence and never stored
/// independently of it.
///
/// Deserialization reads only `sequence` and rescores it with
/// `FoldingWindow::default()`; serialized metadata is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CandidateRecord")]
pub struct Candidate {
    sequence: NucleotideVec,
    gc_content: f64,
    folding_score: f64,
}

impl Candidate {
    pub fn new(sequence: NucleotideVec, window: &FoldingWindow) -> Self {
        let gc_content = gc_fraction(&sequence);
        let folding_score = window.estimate(&sequence);
        Candidate { sequence, gc_content, folding_score }
    }

    pub fn sequence(&self) -> &NucleotideVec {
        &self.sequence
    }

    pub fn gc_content(&self) -> f64 {
        self.gc_content
    }

    pub fn folding_score(&self) -> f64 {
        self.folding_score
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn into_sequence(self) -> NucleotideVec {
        self.sequence
    }
}

#[derive(Deserialize)]
struct CandidateRecord {
    sequence: NucleotideVec,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Candidate::new(record.sequence, &FoldingWindow::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_computed() {
        let seq = NucleotideVec::try_from("GGGGAAAATTTTCCCC").unwrap();
        let c = Candidate::new(seq.clone(), &FoldingWindow::SELEX);
        assert_eq!(c.gc_content(), 0.5);
        assert_eq!(c.folding_score(), FoldingWindow::SELEX.estimate(&seq));
        assert_eq!(c.len(), 16);
    }

    #[test]
    fn test_deserialize_recomputes_metadata() {
        let json = r#"{"sequence":"GGGG","gc_content":0.1,"folding_score":9.0}"#;
        let c: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.gc_content(), 1.0);
        assert_eq!(c.folding_score(), 0.0);

        let c: Candidate = serde_json::from_str(r#"{"sequence":"GCGA"}"#).unwrap();
        assert_eq!(c.gc_content(), 0.75);
        assert_eq!(c, Candidate::new(NucleotideVec::try_from("GCGA").unwrap(), &FoldingWindow::SELEX));

        assert!(serde_json::from_str::<Candidate>(r#"{"sequence":"GCXA"}"#).is_err());
    }

    #[test]
    fn test_json_shape() {
        let c = Candidate::new(NucleotideVec::try_from("GCAT").unwrap(), &FoldingWindow::GENERATOR);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["sequence"], "GCAT");
        assert_eq!(v["gc_content"], 0.5);
        assert!(v["folding_score"].is_number());
    }
}
