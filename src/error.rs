//! Error types for cache construction and mutation.
//!
//! A missing key is never an error: lookup and removal report absence
//! through `Option`. Errors are reserved for a configuration that cannot
//! describe a working cache and for inserting into a cache that can hold
//! nothing.

use core::fmt;

/// Reasons a [`LrukCacheConfig`](crate::config::LrukCacheConfig) fails
/// validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The capacity was zero; a cache must be able to hold at least one
    /// record.
    ZeroCapacity,
    /// The promotion threshold was below two. With `k = 1` every record
    /// would promote on admission and the cold region would never filter
    /// anything.
    KTooSmall {
        /// The rejected threshold.
        k: usize,
    },
    /// The cold fraction fell outside the open interval (0, 1), which
    /// would leave one of the two regions without any capacity.
    ColdFractionOutOfRange {
        /// The rejected fraction.
        cold_fraction: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "cache capacity must be greater than zero"),
            ConfigError::KTooSmall { k } => {
                write!(f, "promotion threshold k must be at least 2, got {k}")
            }
            ConfigError::ColdFractionOutOfRange { cold_fraction } => {
                write!(
                    f,
                    "cold fraction must be strictly between 0 and 1, got {cold_fraction}"
                )
            }
        }
    }
}

/// Errors surfaced by cache construction and by the record store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheError {
    /// The supplied configuration failed validation.
    InvalidConfiguration(ConfigError),
    /// The store cannot admit a record because its capacity is zero.
    CapacityExhausted,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidConfiguration(err) => {
                write!(f, "invalid cache configuration: {err}")
            }
            CacheError::CapacityExhausted => {
                write!(f, "cache capacity is zero; nothing can be admitted")
            }
        }
    }
}

impl From<ConfigError> for CacheError {
    fn from(err: ConfigError) -> Self {
        CacheError::InvalidConfiguration(err)
    }
}
