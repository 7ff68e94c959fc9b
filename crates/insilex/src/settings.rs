//! Run settings: a JSON config file, then command line overrides.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use sx_sequence::GcRange;
use sx_selex::SelexConfig;
use sx_selex::SelexError;

/// Read a (possibly partial) `SelexConfig` from a JSON file. Missing
/// fields take their defaults.
pub fn read_config(path: &Path) -> Result<SelexConfig, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let config: SelexConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Command line values that replace the corresponding config fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub num_rounds: Option<usize>,
    pub library_size: Option<usize>,
    pub selection_pressure: Option<f64>,
    pub mutation_rate: Option<f64>,
    pub gc_min: Option<f64>,
    pub gc_max: Option<f64>,
    pub seq_length: Option<usize>,
    pub max_attempts: Option<usize>,
}

impl ConfigOverrides {
    /// Apply the overrides and validate the result.
    pub fn apply(&self, mut config: SelexConfig) -> Result<SelexConfig, SelexError> {
        if let Some(v) = self.num_rounds {
            config.num_rounds = v;
        }
        if let Some(v) = self.library_size {
            config.library_size = v;
        }
        if let Some(v) = self.selection_pressure {
            config.selection_pressure = v;
        }
        if let Some(v) = self.mutation_rate {
            config.mutation_rate = v;
        }
        if let Some(v) = self.seq_length {
            config.seq_length = v;
        }
        if let Some(v) = self.max_attempts {
            config.max_attempts = v;
        }
        if self.gc_min.is_some() || self.gc_max.is_some() {
            let min = self.gc_min.unwrap_or(config.gc_range.min());
            let max = self.gc_max.unwrap_or(config.gc_range.max());
            config.gc_range = GcRange::new(min, max)?;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = ConfigOverrides::default().apply(SelexConfig::default()).unwrap();
        assert_eq!(config, SelexConfig::default());
    }

    #[test]
    fn test_overrides_replace_fields() {
        let overrides = ConfigOverrides {
            num_rounds: Some(3),
            library_size: Some(20),
            selection_pressure: Some(0.3),
            gc_max: Some(0.7),
            ..ConfigOverrides::default()
        };
        let config = overrides.apply(SelexConfig::default()).unwrap();
        assert_eq!(config.num_rounds, 3);
        assert_eq!(config.library_size, 20);
        assert_eq!(config.selection_pressure, 0.3);
        assert_eq!(config.gc_range.min(), 0.4);
        assert_eq!(config.gc_range.max(), 0.7);
        assert_eq!(config.seq_length, 30);
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let overrides = ConfigOverrides { gc_min: Some(0.8), ..ConfigOverrides::default() };
        let err = overrides.apply(SelexConfig::default()).unwrap_err();
        assert!(matches!(err, SelexError::InvalidConfiguration { field: "gc_range", .. }));

        let overrides = ConfigOverrides { mutation_rate: Some(2.0), ..ConfigOverrides::default() };
        assert!(overrides.apply(SelexConfig::default()).is_err());
    }

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join(format!("insilex_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"num_rounds": 4, "gc_range": {"min": 0.45, "max": 0.55}}"#).unwrap();
        let config = read_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.num_rounds, 4);
        assert_eq!(config.gc_range, GcRange::new(0.45, 0.55).unwrap());
        assert_eq!(config.library_size, 1000);

        assert!(read_config(Path::new("/nonexistent/insilex.json")).is_err());
    }
}
