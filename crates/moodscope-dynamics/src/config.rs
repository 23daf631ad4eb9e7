//! Assessment configuration.

use std::path::Path;

use moodscope_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::assessment::MIN_ENTRIES;
use crate::trait_mapper::TraitMappingConfig;

/// Prefix of environment overrides, e.g. `MOODSCOPE_MIN_ENTRIES=10`
pub const ENV_PREFIX: &str = "MOODSCOPE";

/// Complete assessment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Entries required before an assessment is attempted
    pub min_entries: usize,

    /// Trait weight table
    pub weights: TraitMappingConfig,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            min_entries: MIN_ENTRIES,
            weights: TraitMappingConfig::default(),
        }
    }
}

impl AssessmentConfig {
    /// Load configuration from file, with environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;

        tracing::info!("Loaded assessment configuration from {}", path.display());
        Ok(loaded)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_entries == 0 {
            return Err(Error::Config("min_entries must be at least 1".to_string()));
        }
        self.weights.validate()
    }
}
