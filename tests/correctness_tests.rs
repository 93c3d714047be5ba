//! Correctness Tests for the LRU-K Cache
//!
//! Validates the admission, promotion, and eviction policy using simple,
//! predictable access patterns. Each eviction test explicitly checks which
//! key was displaced.
//!
//! ## Test Strategy
//! - Small cache sizes (1-12 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Full end-to-end traces for the partitioned and shared-pool modes
//! - Structural invariants checked over a longer mixed workload

use lruk_cache::config::LrukCacheConfig;
use lruk_cache::metrics::CacheMetrics;
use lruk_cache::LrukCache;

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create a partitioned cache with the default policy (k = 2,
/// a quarter of the capacity held cold).
fn make_lruk<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LrukCache<K, V> {
    LrukCache::new(cap).unwrap()
}

/// Helper to create a cache from an explicit configuration.
fn make_lruk_with_config<K: std::hash::Hash + Eq + Clone, V>(
    config: LrukCacheConfig,
) -> LrukCache<K, V> {
    LrukCache::from_config(config).unwrap()
}

/// Helper to create a shared-pool cache (one global bound, no per-region
/// caps).
fn make_shared_pool<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LrukCache<K, V> {
    make_lruk_with_config(LrukCacheConfig {
        partitioned: false,
        ..LrukCacheConfig::new(cap)
    })
}

// ============================================================================
// BASIC OPERATIONS
// ============================================================================

#[test]
fn test_lruk_basic_put_get() {
    let mut cache = make_lruk(8);
    cache.put("a", 1);
    cache.put("b", 2);

    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"b"), Some(&2));
    assert_eq!(cache.get(&"c"), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_lruk_overwrite_keeps_one_record() {
    let mut cache = make_lruk(8);
    cache.put("a", 1);
    assert_eq!(cache.put("a", 2), Some(1));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"a"), Some(&2));
}

#[test]
fn test_lruk_remove_and_reinsert() {
    let mut cache = make_lruk(8);
    cache.put("a", 1);
    cache.get(&"a"); // promoted
    assert_eq!(cache.remove(&"a"), Some(1));
    assert_eq!(cache.get(&"a"), None);

    // Re-insertion starts over in the cold region with a fresh count.
    cache.put("a", 2);
    assert_eq!(cache.cold_len(), 1);
    assert_eq!(cache.hot_len(), 0);
}

// ============================================================================
// PROMOTION POLICY
// ============================================================================

#[test]
fn test_lruk_promotes_exactly_on_second_access() {
    let mut cache = make_lruk(8);
    cache.put("a", 1);
    assert_eq!((cache.cold_len(), cache.hot_len()), (1, 0));

    cache.get(&"a");
    assert_eq!((cache.cold_len(), cache.hot_len()), (0, 1));

    // Later accesses re-rank within the hot region, never re-promote.
    cache.get(&"a");
    cache.get(&"a");
    assert_eq!((cache.cold_len(), cache.hot_len()), (0, 1));
    assert_eq!(cache.metrics()["promotions"], 1.0);
}

#[test]
fn test_lruk_higher_k_delays_promotion() {
    let mut cache: LrukCache<&str, i32> = make_lruk_with_config(LrukCacheConfig {
        k: 4,
        ..LrukCacheConfig::new(8)
    });
    cache.put("a", 1);
    cache.get(&"a");
    cache.get(&"a");
    assert_eq!(cache.hot_len(), 0);

    cache.get(&"a"); // fourth access overall
    assert_eq!(cache.hot_len(), 1);
}

#[test]
fn test_lruk_write_promotion_is_configurable() {
    let mut cache: LrukCache<&str, i32> = make_lruk_with_config(LrukCacheConfig {
        promote_on_write: false,
        ..LrukCacheConfig::new(8)
    });
    cache.put("a", 1);
    cache.put("a", 2);
    cache.put("a", 3);
    assert_eq!(cache.hot_len(), 0, "writes must not earn credit here");

    cache.get(&"a");
    assert_eq!(cache.hot_len(), 1, "reads still earn credit");
}

// ============================================================================
// EVICTION POLICY
// ============================================================================

#[test]
fn test_lruk_cold_evicts_oldest_first() {
    // capacity 12 -> cold cap 3.
    let mut cache = make_lruk(12);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.put("d", 4);

    assert_eq!(cache.get(&"a"), None, "oldest cold key is the victim");
    assert!(cache.contains(&"b"));
    assert!(cache.contains(&"c"));
    assert!(cache.contains(&"d"));
}

#[test]
fn test_lruk_cold_order_ignores_recency() {
    // A below-k access must not refresh a cold key's FIFO position.
    let mut cache: LrukCache<&str, i32> = make_lruk_with_config(LrukCacheConfig {
        k: 3,
        ..LrukCacheConfig::new(12)
    });
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"a"); // count 2, still below k = 3

    cache.put("d", 4);
    assert_eq!(cache.get(&"a"), None, "a stays oldest despite the access");
    assert!(cache.contains(&"b"));
}

#[test]
fn test_lruk_global_eviction_spares_hot_while_cold_nonempty() {
    // capacity 4 -> cold cap 1, hot cap 3.
    let mut cache = make_lruk(4);
    for key in ["a", "b", "c"] {
        cache.put(key, 0);
        cache.get(&key);
    }
    cache.put("d", 0);
    assert_eq!(cache.len(), 4);

    cache.put("e", 0);
    assert!(!cache.contains(&"d"), "cold resident pays first");
    assert!(cache.contains(&"a"));
    assert!(cache.contains(&"b"));
    assert!(cache.contains(&"c"));
}

#[test]
fn test_lruk_promotion_evicts_hot_lru_when_full() {
    // capacity 4 -> hot cap 3.
    let mut cache = make_lruk(4);
    for key in ["a", "b", "c"] {
        cache.put(key, 0);
        cache.get(&key);
    }

    cache.put("d", 0);
    cache.get(&"d"); // promotion displaces the hot LRU entry "a"
    assert!(!cache.contains(&"a"));
    assert!(cache.contains(&"d"));
    assert_eq!(cache.hot_len(), 3);
}

// ============================================================================
// END-TO-END TRACES
// ============================================================================

#[test]
fn test_lruk_partitioned_trace_capacity_12() {
    // capacity 12, cold_fraction 0.25 -> cold cap 3, hot cap 9.
    let mut cache: LrukCache<&str, &str> = make_lruk(12);

    cache.put("A", "A");
    cache.put("B", "B");
    cache.put("C", "C");
    cache.put("D", "D"); // cold full at 3: A evicted
    assert_eq!(cache.get(&"A"), None);

    cache.get(&"D"); // promote: cold=[B, C], hot=[D]
    assert_eq!((cache.cold_len(), cache.hot_len()), (2, 1));

    cache.put("E", "E"); // cold=[B, C, E]
    cache.get(&"B"); // promote: cold=[C, E], hot=[B, D]
    assert_eq!((cache.cold_len(), cache.hot_len()), (2, 2));

    // Overwrite counts as the second access and promotes E.
    cache.put("E", "E2");
    assert_eq!((cache.cold_len(), cache.hot_len()), (1, 3));

    assert_eq!(cache.get(&"A"), None);
    assert_eq!(cache.get(&"B"), Some(&"B"), "B is resident in hot");
    assert_eq!(cache.get(&"C"), Some(&"C"));
    assert_eq!(cache.peek(&"E"), Some(&"E2"));
}

#[test]
fn test_lruk_partitioned_trace_capacity_2() {
    // capacity 2 -> cold cap 1, hot cap 1.
    let mut cache: LrukCache<&str, &str> = make_lruk(2);

    cache.put("X", "X");
    cache.put("Y", "Y"); // cold cap 1 reached: X evicted
    assert_eq!(cache.peek(&"X"), None);

    cache.get(&"Y"); // promote: cold=[], hot=[Y]
    cache.put("Z", "Z"); // cold=[Z]
    cache.get(&"Z"); // promote: hot cap 1 reached, Y evicted

    assert_eq!(cache.get(&"Y"), None);
    assert_eq!(cache.get(&"Z"), Some(&"Z"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_lruk_scan_does_not_displace_hot_set() {
    // capacity 8 -> cold cap 2, hot cap 6.
    let mut cache = make_lruk(8);
    for key in 0..4 {
        cache.put(key, key);
        cache.get(&key);
    }
    assert_eq!(cache.hot_len(), 4);

    // A long one-time scan only ever churns the cold region.
    for key in 100..200 {
        cache.put(key, key);
    }
    for key in 0..4 {
        assert_eq!(cache.get(&key), Some(&key), "hot key {key} survived the scan");
    }
    assert_eq!(cache.cold_len(), 2);
}

// ============================================================================
// CAPACITY MODES
// ============================================================================

#[test]
fn test_lruk_shared_pool_hot_grows_to_full_capacity() {
    let mut cache = make_shared_pool(4);
    for key in ["a", "b", "c", "d"] {
        cache.put(key, 0);
        cache.get(&key);
    }
    assert_eq!(cache.hot_len(), 4);
    assert_eq!(cache.cold_len(), 0);

    // With cold empty, the global victim comes from the hot LRU end.
    cache.put("e", 0);
    assert!(!cache.contains(&"a"));
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_lruk_shared_pool_cold_grows_to_full_capacity() {
    let mut cache = make_shared_pool(4);
    for key in ["a", "b", "c", "d"] {
        cache.put(key, 0);
    }
    assert_eq!(cache.cold_len(), 4);

    cache.put("e", 0);
    assert!(!cache.contains(&"a"), "oldest cold key is the global victim");
    assert_eq!(cache.cold_len(), 4);
}

#[test]
fn test_lruk_capacity_one_partitioned() {
    // cold cap 1, hot cap 0: a record is dropped the moment it earns
    // promotion, because there is nowhere to keep it.
    let mut cache = make_lruk(1);
    cache.put("a", 1);
    assert_eq!(cache.get(&"a"), None);
    assert!(cache.is_empty());

    // The cache keeps serving one-shot keys.
    cache.put("b", 2);
    assert_eq!(cache.peek(&"b"), Some(&2));
}

#[test]
fn test_lruk_zero_capacity_config_is_rejected() {
    let result: Result<LrukCache<u32, u32>, _> = LrukCache::new(0);
    assert!(result.is_err());
}

// ============================================================================
// STRUCTURAL INVARIANTS OVER A MIXED WORKLOAD
// ============================================================================

/// Checks the structural invariants that must hold after every operation.
fn check_invariants<V>(cache: &LrukCache<u64, V>) {
    assert!(
        cache.len() <= cache.capacity(),
        "resident count {} exceeds capacity {}",
        cache.len(),
        cache.capacity()
    );
    assert_eq!(
        cache.len(),
        cache.cold_len() + cache.hot_len(),
        "every key lives in exactly one region"
    );
    if cache.is_partitioned() {
        assert!(cache.cold_len() <= cache.cold_capacity());
        assert!(cache.hot_len() <= cache.hot_capacity());
    }
}

#[test]
fn test_lruk_invariants_hold_under_mixed_workload() {
    let mut cache: LrukCache<u64, u64> = make_lruk(16);

    // Deterministic pseudo-random workload over a key space twice the
    // capacity, mixing inserts, re-reads, and removals.
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    for _ in 0..10_000 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let key = (state >> 33) % 32;
        match state % 10 {
            0..=4 => {
                cache.put(key, key);
            }
            5..=8 => {
                if let Some(value) = cache.get(&key) {
                    assert_eq!(*value, key, "value for key {key} was corrupted");
                }
            }
            _ => {
                cache.remove(&key);
            }
        }
        check_invariants(&cache);
    }
}

#[test]
fn test_lruk_invariants_hold_in_shared_pool_mode() {
    let mut cache: LrukCache<u64, u64> = make_shared_pool(8);

    let mut state: u64 = 0x1234_5678_9ABC_DEF0;
    for _ in 0..5_000 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let key = (state >> 33) % 20;
        if state % 3 == 0 {
            cache.get(&key);
        } else {
            cache.put(key, key);
        }
        check_invariants(&cache);
    }
}

// ============================================================================
// METRICS
// ============================================================================

#[test]
fn test_lruk_metrics_report() {
    let mut cache: LrukCache<&str, i32> = make_lruk(8);
    cache.put("a", 1);
    cache.get(&"a"); // cold hit + promotion
    cache.get(&"a"); // hot hit
    cache.get(&"b"); // miss

    let m = cache.metrics();
    assert_eq!(m["requests"], 3.0);
    assert_eq!(m["cache_hits"], 2.0);
    assert_eq!(m["cache_misses"], 1.0);
    assert_eq!(m["cold_hits"], 1.0);
    assert_eq!(m["hot_hits"], 1.0);
    assert_eq!(m["promotions"], 1.0);
    assert_eq!(m["cold_size"], 0.0);
    assert_eq!(m["hot_size"], 1.0);
    assert_eq!(m["hit_rate"], 2.0 / 3.0);
    assert_eq!(cache.algorithm_name(), "LRU-K");
}

#[test]
fn test_lruk_metrics_distinguish_eviction_regions() {
    // capacity 2 -> cold cap 1, hot cap 1; replay the capacity-2 trace.
    let mut cache: LrukCache<&str, &str> = make_lruk(2);
    cache.put("X", "X");
    cache.put("Y", "Y"); // X evicted from cold
    cache.get(&"Y");
    cache.put("Z", "Z");
    cache.get(&"Z"); // Y evicted from hot

    let m = cache.metrics();
    assert_eq!(m["cold_evictions"], 1.0);
    assert_eq!(m["hot_evictions"], 1.0);
    assert_eq!(m["evictions"], 2.0);
    assert_eq!(m["promotions"], 2.0);
}
