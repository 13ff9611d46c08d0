//! Error types for u-partition.

use thiserror::Error;

/// Main error type for partitioning operations.
///
/// All errors are local and deterministic: retrying with the same input
/// reproduces the same error.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// The exhaustive enumerator was invoked on a subset larger than its
    /// threshold. Route the input to the greedy solver instead.
    #[error("subset of {len} entities exceeds the exhaustive threshold of {threshold}")]
    CapacityExceeded { len: usize, threshold: usize },

    /// Malformed entity data (missing or unknown attribute, duplicate id).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid solver configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for partitioning operations.
pub type Result<T> = std::result::Result<T, BalanceError>;
