//! LRU-K Cache Metrics
//!
//! Metrics specific to the two-region LRU-K cache: per-region sizes, hits
//! and evictions, plus promotion traffic between the regions.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-K-specific metrics (extends CoreCacheMetrics).
///
/// The cache divides its records between a cold admission queue and a hot
/// region, so these counters track where hits land, where evictions come
/// from, and how many records earn promotion.
#[derive(Debug, Default, Clone)]
pub struct LrukCacheMetrics {
    /// Core metrics common to all cache policies.
    pub core: CoreCacheMetrics,

    /// Number of records currently in the cold region.
    pub cold_size: u64,

    /// Number of records currently in the hot region.
    pub hot_size: u64,

    /// Total number of promotions from the cold to the hot region.
    pub promotions: u64,

    /// Number of cache hits on records in the cold region.
    pub cold_hits: u64,

    /// Number of cache hits on records in the hot region.
    pub hot_hits: u64,

    /// Number of evictions taken from the cold region.
    pub cold_evictions: u64,

    /// Number of evictions taken from the hot region.
    pub hot_evictions: u64,
}

impl LrukCacheMetrics {
    /// Creates a zeroed metric set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion from the cold to the hot region.
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Records a cache hit on a cold-region record.
    pub fn record_cold_hit(&mut self) {
        self.core.record_hit();
        self.cold_hits += 1;
    }

    /// Records a cache hit on a hot-region record.
    pub fn record_hot_hit(&mut self) {
        self.core.record_hit();
        self.hot_hits += 1;
    }

    /// Records an eviction taken from the cold region.
    pub fn record_cold_eviction(&mut self) {
        self.core.record_eviction();
        self.cold_evictions += 1;
    }

    /// Records an eviction taken from the hot region.
    pub fn record_hot_eviction(&mut self) {
        self.core.record_eviction();
        self.hot_evictions += 1;
    }

    /// Updates the region sizes after a mutation.
    pub fn update_region_sizes(&mut self, cold_size: u64, hot_size: u64) {
        self.cold_size = cold_size;
        self.hot_size = hot_size;
    }

    /// Ratio of hits landing in the hot region vs total hits, or 0.0 if
    /// there were no hits.
    pub fn protection_ratio(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.hot_hits as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// How often a cold hit leads to a promotion, or 0.0 if the cold
    /// region has seen no hits.
    pub fn promotion_efficiency(&self) -> f64 {
        if self.cold_hits > 0 {
            self.promotions as f64 / self.cold_hits as f64
        } else {
            0.0
        }
    }

    /// Converts the full metric set to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("cold_size".to_string(), self.cold_size as f64);
        metrics.insert("hot_size".to_string(), self.hot_size as f64);

        metrics.insert("promotions".to_string(), self.promotions as f64);

        metrics.insert("cold_hits".to_string(), self.cold_hits as f64);
        metrics.insert("hot_hits".to_string(), self.hot_hits as f64);
        metrics.insert("protection_ratio".to_string(), self.protection_ratio());

        metrics.insert("cold_evictions".to_string(), self.cold_evictions as f64);
        metrics.insert("hot_evictions".to_string(), self.hot_evictions as f64);

        metrics.insert(
            "promotion_efficiency".to_string(),
            self.promotion_efficiency(),
        );

        if self.core.requests > 0 {
            metrics.insert(
                "promotion_rate".to_string(),
                self.promotions as f64 / self.core.requests as f64,
            );
        }

        metrics
    }
}

impl CacheMetrics for LrukCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU-K"
    }
}
