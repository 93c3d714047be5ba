//! Cache configuration.
//!
//! [`LrukCacheConfig`] has all public fields for simple instantiation:
//! create the struct with every field set, or start from
//! [`LrukCacheConfig::new`] for the defaults and override what you need.
//! Validation happens once, when the cache is constructed from the config.
//!
//! # Examples
//!
//! ```
//! use lruk_cache::config::LrukCacheConfig;
//! use lruk_cache::LrukCache;
//!
//! let config = LrukCacheConfig {
//!     capacity: 1000,
//!     k: 2,
//!     cold_fraction: 0.25,
//!     partitioned: true,
//!     promote_on_write: true,
//! };
//!
//! let cache: LrukCache<String, i32> = LrukCache::from_config(config).unwrap();
//! assert_eq!(cache.cold_capacity(), 250);
//! assert_eq!(cache.hot_capacity(), 750);
//! ```

use crate::error::{CacheError, ConfigError};
use core::fmt;

/// Configuration for an [`LrukCache`](crate::LrukCache).
///
/// The fields describe both the total size of the cache and how it is
/// split between the cold admission region and the hot region.
#[derive(Clone, Copy)]
pub struct LrukCacheConfig {
    /// Maximum number of records the cache holds, across both regions.
    pub capacity: usize,

    /// Promotion threshold: a record moves to the hot region on its
    /// `k`-th access. Must be at least 2.
    pub k: usize,

    /// Fraction of `capacity` reserved for the cold region when the
    /// cache is partitioned. Must lie strictly between 0 and 1.
    pub cold_fraction: f64,

    /// When true, each region enforces its own capacity in addition to
    /// the global bound. When false, the regions share the capacity as
    /// one pool and only the global bound applies.
    pub partitioned: bool,

    /// When true, overwriting an existing key counts as an access and
    /// can promote the record. When false, only reads earn promotion
    /// credit.
    pub promote_on_write: bool,
}

impl LrukCacheConfig {
    /// Default promotion threshold.
    pub const DEFAULT_K: usize = 2;

    /// Default share of capacity given to the cold region.
    pub const DEFAULT_COLD_FRACTION: f64 = 0.25;

    /// Creates a configuration with the given capacity and the default
    /// policy: `k = 2`, a quarter of the capacity held cold, partitioned
    /// regions, and writes earning promotion credit.
    pub fn new(capacity: usize) -> Self {
        LrukCacheConfig {
            capacity,
            k: Self::DEFAULT_K,
            cold_fraction: Self::DEFAULT_COLD_FRACTION,
            partitioned: true,
            promote_on_write: true,
        }
    }

    /// Checks that the configuration describes a working cache.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity.into());
        }
        if self.k < 2 {
            return Err(ConfigError::KTooSmall { k: self.k }.into());
        }
        if !(self.cold_fraction > 0.0 && self.cold_fraction < 1.0) {
            return Err(ConfigError::ColdFractionOutOfRange {
                cold_fraction: self.cold_fraction,
            }
            .into());
        }
        Ok(())
    }

    /// Maximum number of records the cold region holds.
    ///
    /// In partitioned mode this is `max(1, floor(capacity * cold_fraction))`,
    /// so the admission queue always has at least one slot. In shared-pool
    /// mode the cold region is bounded only by the total capacity.
    pub fn cold_capacity(&self) -> usize {
        if self.partitioned {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            let scaled = (self.capacity as f64 * self.cold_fraction) as usize;
            scaled.max(1)
        } else {
            self.capacity
        }
    }

    /// Maximum number of records the hot region holds.
    ///
    /// In partitioned mode this is the capacity left after the cold
    /// region's share; it can be zero when `capacity == 1`. In shared-pool
    /// mode the hot region is bounded only by the total capacity.
    pub fn hot_capacity(&self) -> usize {
        if self.partitioned {
            self.capacity.saturating_sub(self.cold_capacity())
        } else {
            self.capacity
        }
    }
}

impl fmt::Debug for LrukCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LrukCacheConfig")
            .field("capacity", &self.capacity)
            .field("k", &self.k)
            .field("cold_fraction", &self.cold_fraction)
            .field("partitioned", &self.partitioned)
            .field("promote_on_write", &self.promote_on_write)
            .finish()
    }
}
