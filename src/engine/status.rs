//! Generation of K independent persisted RNG statuses.
//!
//! A single seeded stream is advanced by one full replicate's draw budget
//! (POINTS × DIMENSION) between snapshots, so the K statuses sit at
//! disjoint offsets of one logical sequence. Each replicate later consumes
//! at most that budget, so the K sample windows never overlap.

use tracing::info;

use crate::config::Config;
use crate::engine::rng::ReplicateRng;
use crate::error::PimcResult;

/// Produces the persisted statuses consumed by the orchestrator.
#[derive(Debug)]
pub struct StatusGenerator {
    config: Config,
}

impl StatusGenerator {
    /// Create a generator for a configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Burn through the master stream and snapshot one status per
    /// replicate into the status directory.
    ///
    /// Status `i` is saved after (i + 1) × POINTS × DIMENSION draws, under
    /// the name `status-{i:02}`.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or any status
    /// write fails. A partial set of status files may remain on failure.
    pub fn generate(&self) -> PimcResult<()> {
        std::fs::create_dir_all(&self.config.status_dir)?;

        let burn = self.config.draws_per_replicate();
        let mut rng = ReplicateRng::from_seed(self.config.seed);

        for index in 0..self.config.replicates {
            rng.discard(burn);
            let path = self.config.status_path(index);
            rng.save_status(&path)?;
            info!(replicate = index, path = %path.display(), draws = burn, "status saved");
        }

        Ok(())
    }
}
