//! Error types for the simulator.
//!
//! Three layers of failure exist, and all of them are fatal to a run:
//! 1. **Configuration:** Rejected before any table is allocated.
//! 2. **Trace I/O:** The trace file cannot be opened or a read fails midway.
//! 3. **Simulation:** The umbrella type returned by the driver, which also
//!    covers report serialization.
//!
//! Malformed trace lines are not errors; the trace reader skips them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Invalid simulator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Frame count must be strictly positive.
    #[error("Number of frames must be > 0 (got {0})")]
    InvalidFrameCount(i64),

    /// Replacement algorithm name not recognised.
    #[error("Unknown replacement algorithm '{0}' (expected fifo, lru or clock)")]
    UnknownAlgorithm(String),

    /// Write policy name not recognised.
    #[error("Unknown write policy '{0}' (expected wt or wb)")]
    UnknownWritePolicy(String),

    /// Configuration file could not be read.
    #[error("Error reading config file '{}': {source}", .path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON configuration could not be parsed.
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reading the access trace.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The trace file could not be opened.
    #[error("Error opening trace file '{}': {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A read failed partway through the trace.
    #[error("Error reading trace: {0}")]
    Read(#[from] io::Error),
}

/// Any failure that aborts a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trace input failed.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The final report could not be rendered as JSON.
    #[error("Failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),
}
