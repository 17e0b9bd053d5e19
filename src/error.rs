//! Error types for filter construction

use thiserror::Error;

/// Errors raised while building a filter or its hash family.
///
/// Only construction can fail. Once a filter exists, `insert` and
/// `contains` never return one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("filter size must be at least 1 bit, got {size}")]
    InvalidSize { size: usize },

    #[error("number of hash functions must be at least 1, got {num_hashes}")]
    InvalidHashCount { num_hashes: usize },

    #[error("expected {expected} coefficient pairs, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },

    #[error("cannot allocate a filter of {size} bits")]
    TooLarge { size: usize },

    #[error("expected items count must be at least 1, got {items_count}")]
    InvalidItemsCount { items_count: usize },

    #[error("false positive rate must be in (0.0, 1.0), got {fp_rate}")]
    InvalidFpRate { fp_rate: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
