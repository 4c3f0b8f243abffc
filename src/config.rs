//! Configuration with YAML schema and validation.
//!
//! Type-safe configuration structs with compile-time validation via serde
//! and runtime semantic validation. All values have defaults matching the
//! reference experiment; a YAML file or the builder overrides them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{PimcError, PimcResult};

/// Default generation seed: alternating bit pattern with equal numbers of
/// set and clear bits. Chosen for reproducibility, not unpredictability.
pub const DEFAULT_SEED: u64 = 0xAAAA_AAAA;

/// Coordinates drawn per sample point. The estimator samples the positive
/// octant of the unit sphere in three dimensions.
pub const DIMENSION: usize = 3;

/// Experiment configuration.
///
/// Loaded from YAML with schema validation, or built programmatically.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed for the master status-generation stream.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of independent replicates (K).
    #[validate(range(min = 2))]
    #[serde(default = "default_replicates")]
    pub replicates: usize,

    /// Sample points drawn per replicate.
    #[validate(range(min = 100))]
    #[serde(default = "default_points")]
    pub points: u64,

    /// Directory holding the persisted RNG statuses.
    #[serde(default = "default_status_dir")]
    pub status_dir: PathBuf,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

const fn default_replicates() -> usize {
    10
}

const fn default_points() -> u64 {
    1_000_000
}

fn default_status_dir() -> PathBuf {
    PathBuf::from("status")
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> PimcResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PimcResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Draws one replicate consumes: POINTS × DIMENSION. The status
    /// generator burns exactly this many draws between snapshots, so the
    /// K replicate sample windows never overlap.
    #[must_use]
    pub const fn draws_per_replicate(&self) -> u64 {
        self.points * DIMENSION as u64
    }

    /// Path of the status file for a replicate index.
    #[must_use]
    pub fn status_path(&self, index: usize) -> PathBuf {
        self.status_dir.join(format!("status-{index:02}"))
    }

    /// Semantic constraints beyond the schema.
    fn validate_semantic(&self) -> PimcResult<()> {
        // A summary over fewer than two replicates divides by K - 1.
        if self.replicates < 2 {
            return Err(PimcError::config(format!(
                "at least 2 replicates are required, got {}",
                self.replicates
            )));
        }
        if self.points == 0 {
            return Err(PimcError::config("points must be positive"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            replicates: default_replicates(),
            points: default_points(),
            status_dir: default_status_dir(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    seed: Option<u64>,
    replicates: Option<usize>,
    points: Option<u64>,
    status_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Set the generation seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the replicate count.
    #[must_use]
    pub const fn replicates(mut self, replicates: usize) -> Self {
        self.replicates = Some(replicates);
        self
    }

    /// Set the per-replicate point count.
    #[must_use]
    pub const fn points(mut self, points: u64) -> Self {
        self.points = Some(points);
        self
    }

    /// Set the status directory.
    #[must_use]
    pub fn status_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.status_dir = Some(dir.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        let mut config = Config::default();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(replicates) = self.replicates {
            config.replicates = replicates;
        }
        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(dir) = self.status_dir {
            config.status_dir = dir;
        }
        config
    }
}
