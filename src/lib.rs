//! # pimc
//!
//! Replicated Monte Carlo estimation of π via the unit-sphere octant.
//!
//! The pipeline has two halves:
//! - `pimc generate` burns through a single seeded stream and snapshots K
//!   disjoint RNG statuses to disk, one per replicate.
//! - `pimc run` restores the K statuses, runs K independent sampling
//!   replicates in parallel and again sequentially, cross-checks the two
//!   passes for bitwise identity, and reports Student-t confidence
//!   statistics against the true value 4π/3.
//!
//! ## Example
//!
//! ```rust
//! use pimc::prelude::*;
//!
//! let config = Config::builder()
//!     .seed(0xAAAA_AAAA)
//!     .replicates(4)
//!     .points(1_000)
//!     .build();
//! assert_eq!(config.draws_per_replicate(), 3_000);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suspicious_operation_groupings, // False positive for variance = E[X²] - E[X]²
    clippy::suboptimal_flops,               // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::missing_const_for_fn
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod stats;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::engine::orchestrator::{Orchestrator, RunReport};
    pub use crate::engine::replicate::ReplicateRecord;
    pub use crate::engine::rng::ReplicateRng;
    pub use crate::engine::status::StatusGenerator;
    pub use crate::error::{PimcError, PimcResult};
    pub use crate::stats::{summarize, AggregateStatistics};
}

/// Re-export for public API
pub use error::{PimcError, PimcResult};
