//! The sx_sequence crate.
//!
//! Provides the sequence-level building blocks of insilex:
//!  - Nucleotides and nucleotide vectors
//!  - GC-content ranges (the GC filter)
//!  - A sliding-window folding heuristic
//!  - Candidates: sequences with their cached metadata
//!

mod error;
mod nucleotide;
mod gc_content;
mod folding;
mod candidate;

pub use error::*;
pub use nucleotide::*;
pub use gc_content::*;
pub use folding::*;
pub use candidate::*;

/// An ordered population of candidates.
pub type Library = Vec<Candidate>;

