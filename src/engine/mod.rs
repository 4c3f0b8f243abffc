//! Replicate execution engine.
//!
//! - `rng`: uniform [0,1) stream with exact state save/restore
//! - `status`: generation of K disjoint persisted RNG statuses
//! - `replicate`: the timed octant sampling loop
//! - `orchestrator`: parallel and sequential passes with cross-check

pub mod orchestrator;
pub mod replicate;
pub mod rng;
pub mod status;

pub use orchestrator::{Orchestrator, ReplicateOutcome, ReproCheck, RunReport};
pub use replicate::ReplicateRecord;
pub use rng::ReplicateRng;
pub use status::StatusGenerator;
