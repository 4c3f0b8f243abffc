//! Deterministic random number generation with persisted statuses.
//!
//! Wraps PCG (Permuted Congruential Generator) and persists its complete
//! internal state as an opaque binary blob, so a restored stream resumes
//! mid-sequence rather than replaying from the seed.
//!
//! # Reproducibility Guarantee
//!
//! Restoring a saved status and drawing N values is bitwise-identical to
//! the original stream's next N draws, across runs, platforms, and threads.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PimcError, PimcResult};

/// Deterministic, reproducible uniform [0,1) generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicateRng {
    /// Internal PCG state. Serialized in full for mid-stream resume.
    rng: Pcg64,
}

impl ReplicateRng {
    /// Create a new stream from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Draw a uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Draw and discard `n` values, advancing the stream position.
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            let _ = self.next_f64();
        }
    }

    /// Persist the current stream position to a status file.
    ///
    /// The blob is opaque; only [`ReplicateRng::restore_status`] interprets
    /// it.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save_status(&self, path: &Path) -> PimcResult<()> {
        let blob =
            bincode::serialize(&self.rng).map_err(|e| PimcError::serialization(e.to_string()))?;
        std::fs::write(path, blob)?;
        Ok(())
    }

    /// Restore a stream from a persisted status file.
    ///
    /// # Errors
    ///
    /// Returns [`PimcError::StateLoad`] if the file is missing or the blob
    /// is corrupt.
    pub fn restore_status(path: &Path) -> PimcResult<Self> {
        let blob = std::fs::read(path).map_err(|e| PimcError::state_load(path, e.to_string()))?;
        let rng: Pcg64 = bincode::deserialize(&blob)
            .map_err(|e| PimcError::state_load(path, format!("corrupt status blob: {e}")))?;
        Ok(Self { rng })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: reproducibility holds for any seed.
        #[test]
        fn prop_reproducibility(seed in 0u64..u64::MAX) {
            let mut rng1 = ReplicateRng::from_seed(seed);
            let mut rng2 = ReplicateRng::from_seed(seed);

            let seq1: Vec<f64> = (0..100).map(|_| rng1.next_f64()).collect();
            let seq2: Vec<f64> = (0..100).map(|_| rng2.next_f64()).collect();

            prop_assert_eq!(seq1, seq2);
        }

        /// Falsification test: values in [0, 1) for any seed.
        #[test]
        fn prop_unit_interval(seed in 0u64..u64::MAX) {
            let mut rng = ReplicateRng::from_seed(seed);

            for _ in 0..100 {
                let v = rng.next_f64();
                prop_assert!((0.0..1.0).contains(&v), "Value {} not in [0, 1)", v);
            }
        }

        /// Falsification test: a status round-trips at any stream offset.
        #[test]
        fn prop_round_trip_any_offset(seed in 0u64..u64::MAX, offset in 0u64..2_000) {
            let dir = tempfile::tempdir().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let path = dir.path().join("status-00");

            let mut original = ReplicateRng::from_seed(seed);
            original.discard(offset);
            original.save_status(&path).map_err(|e| TestCaseError::fail(e.to_string()))?;

            let mut restored = ReplicateRng::restore_status(&path)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            for _ in 0..32 {
                prop_assert_eq!(original.next_f64().to_bits(), restored.next_f64().to_bits());
            }
        }
    }
}
