//! Run parameters of the SELEX engine.

use serde::Serialize;
use serde::Deserialize;
use sx_sequence::GcRange;

use crate::SelexError;

/// Default attempt ceiling for fresh-mode rejection sampling.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelexConfig {
    /// Number of selection rounds (always run to completion).
    pub num_rounds: usize,
    /// Size of the initial library only.
    pub library_size: usize,
    /// Fraction of each round's scored pool that is kept, in (0, 1].
    pub selection_pressure: f64,
    /// Per-position mutation probability during amplification, in [0, 1].
    pub mutation_rate: f64,
    pub gc_range: GcRange,
    pub seq_length: usize,
    /// Consecutive rejected draws allowed per accepted fresh sequence.
    pub max_attempts: usize,
}

impl Default for SelexConfig {
    fn default() -> Self {
        SelexConfig {
            num_rounds: 8,
            library_size: 1000,
            selection_pressure: 0.1,
            mutation_rate: 0.05,
            gc_range: GcRange::default(),
            seq_length: 30,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SelexConfig {
    pub fn validate(&self) -> Result<(), SelexError> {
        if self.num_rounds == 0 {
            return Err(SelexError::invalid("num_rounds", "must be positive"));
        }
        if self.library_size == 0 {
            return Err(SelexError::invalid("library_size", "must be positive"));
        }
        if self.seq_length == 0 {
            return Err(SelexError::invalid("seq_length", "must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(SelexError::invalid("max_attempts", "must be positive"));
        }
        let p = self.selection_pressure;
        if !(p > 0.0 && p <= 1.0) {
            return Err(SelexError::invalid(
                "selection_pressure",
                format!("{p} is not in (0, 1]"),
            ));
        }
        let m = self.mutation_rate;
        if !(0.0..=1.0).contains(&m) {
            return Err(SelexError::invalid(
                "mutation_rate",
                format!("{m} is not in [0, 1]"),
            ));
        }
        self.gc_range.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: SelexError) -> &'static str {
        match err {
            SelexError::InvalidConfiguration { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SelexConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = SelexConfig::default();

        let c = SelexConfig { seq_length: 0, ..base.clone() };
        assert_eq!(field_of(c.validate().unwrap_err()), "seq_length");

        let c = SelexConfig { library_size: 0, ..base.clone() };
        assert_eq!(field_of(c.validate().unwrap_err()), "library_size");

        let c = SelexConfig { num_rounds: 0, ..base.clone() };
        assert_eq!(field_of(c.validate().unwrap_err()), "num_rounds");

        for p in [0.0, -0.5, 1.5, f64::NAN] {
            let c = SelexConfig { selection_pressure: p, ..base.clone() };
            assert_eq!(field_of(c.validate().unwrap_err()), "selection_pressure");
        }

        for m in [-0.01, 1.01, f64::NAN] {
            let c = SelexConfig { mutation_rate: m, ..base.clone() };
            assert_eq!(field_of(c.validate().unwrap_err()), "mutation_rate");
        }
    }

    #[test]
    fn test_rejects_deserialized_bad_gc_range() {
        let c: SelexConfig = serde_json::from_str(r#"{"gc_range": {"min": 0.6, "max": 0.4}}"#).unwrap();
        assert_eq!(field_of(c.validate().unwrap_err()), "gc_range");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: SelexConfig = serde_json::from_str(r#"{"num_rounds": 3, "seq_length": 15}"#).unwrap();
        assert_eq!(c.num_rounds, 3);
        assert_eq!(c.seq_length, 15);
        assert_eq!(c.library_size, 1000);
        assert_eq!(c.gc_range, GcRange::default());
    }
}
