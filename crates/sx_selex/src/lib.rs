//! The sx_selex crate.
//!
//! Provides the in-silico SELEX round engine:
//!  - Library generation (fresh and pool resampling)
//!  - Affinity scoring against an optional target
//!  - Rank-based selection
//!  - GC-preserving mutation and amplification
//!  - The round loop with its history and recovery policy
//!
//! Also provides the single-shot aptamer generator and evaluator.
//!

/// Single-shot aptamer generation and evaluation.
pub mod design;

mod error;
mod config;
mod generator;
mod scoring;
mod selection;
mod mutation;
mod amplification;
mod recovery;
mod engine;

pub use error::*;
pub use config::*;
pub use generator::*;
pub use scoring::*;
pub use selection::*;
pub use mutation::*;
pub use amplification::*;
pub use recovery::*;
pub use engine::*;

