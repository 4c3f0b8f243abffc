//! Orchestration of the K replicate simulations.
//!
//! Protocol:
//! 1. Restore K persisted statuses into K records (untimed).
//! 2. Parallel pass: one thread per replicate, join-all, collect
//!    estimates and per-replicate durations.
//! 3. Summarize the parallel estimates.
//! 4. Re-restore the same statuses, resetting every stream.
//! 5. Sequential pass in replicate-index order on the calling thread.
//! 6. Compare the two passes per replicate with exact bit equality.
//! 7. Accumulate the total sequential duration.
//!
//! A status-load failure is fatal; a reproducibility mismatch is a
//! per-replicate diagnostic and the pipeline still reports statistics.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::replicate::ReplicateRecord;
use crate::engine::rng::ReplicateRng;
use crate::error::PimcResult;
use crate::stats::{self, AggregateStatistics};

/// Result of one replicate's parallel-pass run.
#[derive(Debug, Clone, Serialize)]
pub struct ReplicateOutcome {
    /// Replicate index.
    pub id: usize,
    /// Estimated unit-sphere volume.
    pub estimate: f64,
    /// Sampling-loop duration in seconds.
    pub elapsed_secs: f64,
}

/// Per-replicate reproducibility verdict from the sequential pass.
#[derive(Debug, Clone, Serialize)]
pub struct ReproCheck {
    /// Replicate index.
    pub id: usize,
    /// Parallel-pass estimate.
    pub parallel: f64,
    /// Sequential-pass estimate.
    pub sequential: f64,
    /// Whether the two estimates share the same IEEE-754 bit pattern.
    pub confirmed: bool,
}

impl ReproCheck {
    fn compare(id: usize, parallel: f64, sequential: f64) -> Self {
        Self {
            id,
            parallel,
            sequential,
            // Exact bit equality, not an epsilon comparison: any bit
            // difference is a reproducibility issue.
            confirmed: parallel.to_bits() == sequential.to_bits(),
        }
    }
}

/// Full report of one orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Parallel-pass outcomes, in replicate order.
    pub outcomes: Vec<ReplicateOutcome>,
    /// Statistics over the parallel-pass estimates.
    pub statistics: AggregateStatistics,
    /// Sequential-pass reproducibility verdicts, in replicate order.
    pub checks: Vec<ReproCheck>,
    /// Accumulated sampling time of the sequential pass, in seconds.
    pub sequential_total_secs: f64,
}

impl RunReport {
    /// Whether every replicate reproduced bit-for-bit.
    #[must_use]
    pub fn all_confirmed(&self) -> bool {
        self.checks.iter().all(|c| c.confirmed)
    }
}

/// Coordinates the parallel and sequential passes over the K replicates.
#[derive(Debug)]
pub struct Orchestrator {
    config: Config,
}

impl Orchestrator {
    /// Create an orchestrator for a configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Restore all K statuses into fresh records.
    ///
    /// # Errors
    ///
    /// Any load failure aborts the run before a single simulation starts.
    fn load_records(&self) -> PimcResult<Vec<ReplicateRecord>> {
        (0..self.config.replicates)
            .map(|id| {
                let path = self.config.status_path(id);
                debug!(replicate = id, path = %path.display(), "loading status");
                let rng = ReplicateRng::restore_status(&path)?;
                Ok(ReplicateRecord::new(id, rng))
            })
            .collect()
    }

    /// Run the full two-pass protocol and produce the report.
    ///
    /// # Errors
    ///
    /// Returns error if any status cannot be loaded or if the replicate
    /// count is too small to summarize.
    pub fn run(&self) -> PimcResult<RunReport> {
        let points = self.config.points;

        // Parallel pass: each thread exclusively owns one record's mutable
        // fields. Partitioning is complete and static, so the join is the
        // only synchronization.
        let mut records = self.load_records()?;
        info!(replicates = records.len(), points, "running parallel pass");
        std::thread::scope(|scope| {
            for record in &mut records {
                scope.spawn(move || record.run(points));
            }
        });

        let outcomes: Vec<ReplicateOutcome> = records
            .iter()
            .map(|r| ReplicateOutcome {
                id: r.id,
                estimate: r.estimate,
                elapsed_secs: r.elapsed.as_secs_f64(),
            })
            .collect();

        let estimates: Vec<f64> = outcomes.iter().map(|o| o.estimate).collect();
        let statistics = stats::summarize(&estimates)?;

        // Sequential pass over freshly reset streams, index order.
        let mut records = self.load_records()?;
        info!(replicates = records.len(), points, "running sequential pass");
        let mut sequential_total = Duration::ZERO;
        let mut checks = Vec::with_capacity(records.len());

        for record in &mut records {
            record.run(points);
            sequential_total += record.elapsed;

            let check = ReproCheck::compare(record.id, estimates[record.id], record.estimate);
            if !check.confirmed {
                let parallel_bits = format!("{:#018x}", check.parallel.to_bits());
                let sequential_bits = format!("{:#018x}", check.sequential.to_bits());
                warn!(
                    replicate = check.id,
                    parallel = %parallel_bits,
                    sequential = %sequential_bits,
                    "reproducibility mismatch"
                );
            }
            checks.push(check);
        }

        Ok(RunReport {
            outcomes,
            statistics,
            checks,
            sequential_total_secs: sequential_total.as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::status::StatusGenerator;

    fn prepared_config(dir: &std::path::Path) -> Config {
        let config = Config::builder()
            .seed(42)
            .replicates(4)
            .points(2_000)
            .status_dir(dir)
            .build();
        StatusGenerator::new(config.clone()).generate().unwrap();
        config
    }

    #[test]
    fn test_run_confirms_reproducibility() {
        let dir = tempfile::tempdir().unwrap();
        let report = Orchestrator::new(prepared_config(dir.path())).run().unwrap();

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.checks.len(), 4);
        assert!(
            report.all_confirmed(),
            "parallel and sequential passes must agree bit-for-bit"
        );
        for check in &report.checks {
            assert_eq!(check.parallel.to_bits(), check.sequential.to_bits());
        }
    }

    #[test]
    fn test_run_outcomes_in_replicate_order() {
        let dir = tempfile::tempdir().unwrap();
        let report = Orchestrator::new(prepared_config(dir.path())).run().unwrap();

        for (index, outcome) in report.outcomes.iter().enumerate() {
            assert_eq!(outcome.id, index);
        }
    }

    #[test]
    fn test_run_twice_gives_identical_estimates() {
        let dir = tempfile::tempdir().unwrap();
        let config = prepared_config(dir.path());

        let first = Orchestrator::new(config.clone()).run().unwrap();
        let second = Orchestrator::new(config).run().unwrap();

        for (a, b) in first.outcomes.iter().zip(second.outcomes.iter()) {
            assert_eq!(a.estimate.to_bits(), b.estimate.to_bits());
        }
        assert_eq!(
            first.statistics.mean.to_bits(),
            second.statistics.mean.to_bits()
        );
    }

    #[test]
    fn test_replicates_produce_distinct_estimates() {
        // Disjoint stream segments: it would be suspicious for two
        // replicates of 2000 points to agree exactly.
        let dir = tempfile::tempdir().unwrap();
        let report = Orchestrator::new(prepared_config(dir.path())).run().unwrap();

        let distinct: std::collections::HashSet<u64> = report
            .outcomes
            .iter()
            .map(|o| o.estimate.to_bits())
            .collect();
        assert!(distinct.len() > 1, "replicate streams must be independent");
    }

    #[test]
    fn test_missing_status_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = prepared_config(dir.path());
        std::fs::remove_file(config.status_path(2)).unwrap();

        let err = Orchestrator::new(config).run().unwrap_err();
        assert!(err.is_fatal_load());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let report = Orchestrator::new(prepared_config(dir.path())).run().unwrap();

        let json = serde_json::to_string(&report).unwrap();
        for field in [
            "\"outcomes\"",
            "\"statistics\"",
            "\"checks\"",
            "\"mean\"",
            "\"confidence_radius\"",
            "\"confirmed\"",
            "\"sequential_total_secs\"",
        ] {
            assert!(json.contains(field), "report JSON missing {field}");
        }
    }

    #[test]
    fn test_statistics_cover_all_replicates() {
        let dir = tempfile::tempdir().unwrap();
        let report = Orchestrator::new(prepared_config(dir.path())).run().unwrap();

        assert_eq!(report.statistics.replicates, 4);
        assert!(report.statistics.mean > 0.0);
        assert!(report.sequential_total_secs >= 0.0);
    }
}
