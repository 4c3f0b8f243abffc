//! One replicate of the octant sampling experiment.
//!
//! A replicate owns its restored RNG stream and runs the Monte Carlo loop:
//! draw (x, y, z) in [0,1)³, count points with x² + y² + z² < 1, and scale
//! the octant fraction by 8 to estimate the volume of the unit sphere
//! (expected value 4π/3).
//!
//! The arithmetic is plain f64 in source order. Both execution passes call
//! the same `run` method, so the bitwise reproducibility cross-check
//! compares identical evaluation sequences.

use std::time::{Duration, Instant};

use crate::engine::rng::ReplicateRng;

/// Per-replicate state: stream, estimate, and timing.
///
/// `estimate` and `elapsed` are written exactly once by [`Self::run`] and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ReplicateRecord {
    /// Ordinal index in [0, K).
    pub id: usize,
    /// The owned stream, consumed by the sampling loop.
    rng: ReplicateRng,
    /// Estimated unit-sphere volume (octant fraction × 8).
    pub estimate: f64,
    /// Wall-clock duration of the sampling loop only.
    pub elapsed: Duration,
}

impl ReplicateRecord {
    /// Create a record from a restored stream.
    #[must_use]
    pub const fn new(id: usize, rng: ReplicateRng) -> Self {
        Self {
            id,
            rng,
            estimate: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Run the sampling loop over `points` trials, consuming the stream.
    ///
    /// Only the loop is timed; status loading happens elsewhere.
    pub fn run(&mut self, points: u64) {
        let start = Instant::now();
        let mut inside: u64 = 0;

        for _ in 0..points {
            let x = self.rng.next_f64();
            let y = self.rng.next_f64();
            let z = self.rng.next_f64();
            let d = x * x + y * y + z * z;
            // Comparing the squared distance to 1 avoids the sqrt.
            if d < 1.0 {
                inside += 1;
            }
        }

        self.estimate = 8.0 * inside as f64 / points as f64;
        self.elapsed = start.elapsed();
    }
}
