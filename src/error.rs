//! Error types for loading, schema binding and model fitting

use std::path::PathBuf;

use thiserror::Error;

/// Why a single (independent, dependent) fit could not be computed.
///
/// These are ordinary outcomes of a selection, reported next to the
/// successful fits rather than aborting the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Fewer than two rows have both values.
    #[error("not enough data for {y} vs {x}: {rows} complete row(s), need at least 2")]
    InsufficientData { x: String, y: String, rows: usize },

    /// The regressor is constant over the complete rows, so the slope is undefined.
    #[error("{x} has zero variance over the rows with {y}; slope is undefined")]
    ZeroVariance { x: String, y: String },

    /// Sums of squares overflow or underflow f64 at this scale.
    #[error("{y} vs {x}: values are too large or too small to fit in double precision")]
    OutOfRange { x: String, y: String },
}

/// A loaded dataset does not carry the recognised indicator columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("dataset is missing {} expected column(s): {}", missing.len(), missing.join("; "))]
    Mismatch { missing: Vec<String> },
}

/// Invalid arguments to the distribution helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
