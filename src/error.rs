//! Error types for pimc.
//!
//! All fallible operations return `Result<T, PimcError>` instead of
//! panicking. A status-load failure is fatal and aborts a run before any
//! simulation starts; a reproducibility mismatch is deliberately *not* an
//! error (it is a per-replicate verdict in the report).

use std::path::Path;
use thiserror::Error;

/// Result type alias for pimc operations.
pub type PimcResult<T> = Result<T, PimcError>;

/// Unified error type for all pimc operations.
#[derive(Debug, Error)]
pub enum PimcError {
    /// A persisted RNG status is missing or unreadable.
    #[error("failed to load RNG status '{path}': {reason}")]
    StateLoad {
        /// Path of the status file.
        path: String,
        /// What went wrong (missing file, short read, corrupt blob).
        reason: String,
    },

    /// Statistics over fewer than two replicates are undefined
    /// (Bessel's correction divides by K − 1).
    #[error("cannot summarize {replicates} replicate(s): at least 2 are required")]
    DegenerateSample {
        /// Number of replicates supplied.
        replicates: usize,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Status blob serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PimcError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a status-load error for a path.
    #[must_use]
    pub fn state_load(path: &Path, reason: impl Into<String>) -> Self {
        Self::StateLoad {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether this error aborts a run before any simulation starts.
    #[must_use]
    pub const fn is_fatal_load(&self) -> bool {
        matches!(self, Self::StateLoad { .. })
    }
}
