//! LRU-K Cache Implementation
//!
//! LRU-K is a scan-resistant cache algorithm that tracks how many times each
//! key has been accessed and splits the cache into two regions: a **cold
//! admission queue** for keys seen fewer than `k` times and a **hot region**
//! for keys with a proven re-access pattern. With the default `k = 2`, a key
//! must be touched twice before it earns a long-lived slot.
//!
//! # How the Algorithm Works
//!
//! ## Region Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                           LRU-K Cache                              │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                   HOT REGION (LRU order)                     │  │
//! │  │        Keys accessed >= k times - harder to evict            │  │
//! │  │  ┌────────────────────────────────────────────────────────┐  │  │
//! │  │  │ MRU ◀──▶ [hot_1] ◀──▶ [hot_2] ◀──▶ ... ◀──▶ [victim]  │  │  │
//! │  │  └────────────────────────────────────────────────────────┘  │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                           ▲ promote on k-th access                 │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                COLD REGION (FIFO order)                      │  │
//! │  │        Keys seen < k times - evicted oldest-first            │  │
//! │  │  ┌────────────────────────────────────────────────────────┐  │  │
//! │  │  │ oldest [victim] ◀──▶ ... ◀──▶ [new_2] ◀──▶ [new_1]    │  │  │
//! │  │  └────────────────────────────────────────────────────────┘  │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                           ▲ insert                                 │
//! │                      new keys                                      │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Lifecycle
//!
//! 1. **Insert**: a new key enters the tail of the cold queue with an
//!    access count of 1.
//! 2. **Accesses below `k`**: the count rises but the record keeps its
//!    FIFO position; recency earns nothing in the cold region.
//! 3. **The `k`-th access**: the record leaves the cold queue and enters
//!    the hot region at the MRU position. Promotion happens exactly once.
//! 4. **Accesses above `k`**: the record moves back to the hot MRU
//!    position; ordinary LRU behavior from here on.
//! 5. **Eviction**: cold victims leave oldest-first; hot victims leave
//!    from the LRU end. Global eviction drains the cold queue before it
//!    ever touches the hot region.
//!
//! ## Scan Resistance Example
//!
//! ```text
//! Initial state: Hot=[A, B, C], Cold=[D]   (A, B, C each accessed twice)
//!
//! Sequential scan of X, Y, Z (one-time access each):
//!   put(X) → Hot=[A, B, C], Cold=[D, X]
//!   put(Y) → Hot=[A, B, C], Cold=[X, Y]   (D evicted, oldest cold)
//!   put(Z) → Hot=[A, B, C], Cold=[Y, Z]   (X evicted, oldest cold)
//!
//! The scan churned only the cold queue; the proven hot set survived.
//! ```
//!
//! # Capacity Modes
//!
//! - **Partitioned** (default): the cold region is capped at
//!   `max(1, floor(capacity * cold_fraction))` and the hot region takes
//!   the rest. Each region enforces its own bound locally.
//! - **Shared pool**: one global bound; either region may grow to the
//!   full capacity at the other's expense.
//!
//! # Performance Characteristics
//!
//! | Operation | Time |
//! |-----------|------|
//! | `get` | O(1) |
//! | `put` | O(1) |
//! | `remove` | O(1) |
//!
//! Every operation performs a constant number of hash lookups and list
//! splices; both regions share one slot-arena list type, so no allocation
//! happens outside arena growth.
//!
//! # When to Use LRU-K
//!
//! **Good for:**
//! - Workloads where plain LRU thrashes under sequential scans
//! - Database page buffers and file system caches
//! - Mixed traffic with a stable working set behind one-off reads
//!
//! **Not ideal for:**
//! - Pure recency-driven patterns (plain LRU is simpler)
//! - Tiny caches where the two-region split leaves the hot region empty
//!
//! # Thread Safety
//!
//! `LrukCache` is **not thread-safe**. Wrap it in a `Mutex` or `RwLock`
//! for concurrent access.
//!
//! # Examples
//!
//! ```
//! use lruk_cache::LrukCache;
//!
//! let mut cache: LrukCache<&str, i32> = LrukCache::new(8).unwrap();
//!
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(&1));   // second access, promoted
//! assert_eq!(cache.hot_len(), 1);
//! assert_eq!(cache.cold_len(), 0);
//! ```

extern crate alloc;

use crate::config::LrukCacheConfig;
use crate::error::CacheError;
use crate::list::List;
use crate::metrics::{CacheMetrics, LrukCacheMetrics};
use crate::store::{RecordStore, Residency};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A scan-resistant LRU-K cache.
///
/// Keys live in one of two regions: a FIFO cold queue for keys seen fewer
/// than `k` times and an LRU hot region for keys seen at least `k` times.
/// A single hash index maps every resident key to its value, access count,
/// and region position, so each operation costs O(1).
///
/// See the [module documentation](self) for the full algorithm.
pub struct LrukCache<K, V, S = DefaultHashBuilder> {
    config: LrukCacheConfig,
    store: RecordStore<K, V, S>,
    /// FIFO queue of keys seen fewer than `k` times. Oldest at the front.
    cold: List<K>,
    /// LRU list of keys seen at least `k` times. MRU at the front.
    hot: List<K>,
    metrics: LrukCacheMetrics,
}

impl<K: Hash + Eq + Clone, V> LrukCache<K, V> {
    /// Creates a cache with the given capacity and the default policy
    /// (`k = 2`, a quarter of the capacity held cold, partitioned regions).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] when `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use lruk_cache::LrukCache;
    ///
    /// let cache: LrukCache<String, i32> = LrukCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert_eq!(cache.cold_capacity(), 25);
    /// ```
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::from_config(LrukCacheConfig::new(capacity))
    }

    /// Creates a cache from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] when the configuration
    /// fails [`LrukCacheConfig::validate`].
    pub fn from_config(config: LrukCacheConfig) -> Result<Self, CacheError> {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LrukCache<K, V, S> {
    /// Creates a cache from a configuration and an explicit hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] when the configuration
    /// fails [`LrukCacheConfig::validate`].
    pub fn with_hasher(config: LrukCacheConfig, hash_builder: S) -> Result<Self, CacheError> {
        config.validate()?;
        Ok(LrukCache {
            config,
            store: RecordStore::with_hasher(config.capacity, hash_builder),
            cold: List::with_capacity(config.cold_capacity().min(config.capacity)),
            hot: List::new(),
            metrics: LrukCacheMetrics::new(),
        })
    }

    /// Looks up `key`, counting the access toward promotion.
    ///
    /// A hit on a cold record raises its access count and, on the `k`-th
    /// access, promotes it to the hot MRU position. A hit on a hot record
    /// moves it to the MRU position. A miss changes nothing but the miss
    /// counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let residency = match self.store.lookup(key) {
            Some(record) => record.residency,
            None => {
                self.metrics.core.record_miss();
                return None;
            }
        };
        match residency {
            Residency::Cold => self.metrics.record_cold_hit(),
            Residency::Hot => self.metrics.record_hot_hit(),
        }
        self.touch(key);
        self.sync_region_sizes();
        self.store.lookup(key).map(|record| &record.value)
    }

    /// Looks up `key` for mutation, with the same promotion behavior as
    /// [`get`](Self::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let residency = match self.store.lookup(key) {
            Some(record) => record.residency,
            None => {
                self.metrics.core.record_miss();
                return None;
            }
        };
        match residency {
            Residency::Cold => self.metrics.record_cold_hit(),
            Residency::Hot => self.metrics.record_hot_hit(),
        }
        self.touch(key);
        self.sync_region_sizes();
        self.store.lookup_mut(key).map(|record| &mut record.value)
    }

    /// Looks up `key` without counting the access or reordering anything.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.lookup(key).map(|record| &record.value)
    }

    /// Inserts or overwrites `key`, returning the replaced value if the
    /// key was already resident.
    ///
    /// A new key is admitted at the tail of the cold queue with an access
    /// count of 1, evicting first globally (cold oldest, then hot LRU)
    /// and then against the cold region's own cap when partitioned. An
    /// overwrite keeps the record's position and count, and additionally
    /// counts as an access when `promote_on_write` is set.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.config.capacity == 0 {
            // Nothing can be admitted; see RecordStore::insert.
            return None;
        }

        if let Some(record) = self.store.lookup_mut(&key) {
            let old = mem::replace(&mut record.value, value);
            if self.config.promote_on_write {
                self.touch(&key);
            }
            self.sync_region_sizes();
            return Some(old);
        }

        if self.store.len() >= self.config.capacity {
            self.evict_any();
        }
        if self.config.partitioned && self.cold.len() >= self.config.cold_capacity() {
            self.evict_cold_oldest();
        }

        let node = self.cold.push_back(key.clone());
        if self.store.insert(key, value, node).is_ok() {
            self.metrics.core.record_insertion();
        }
        self.sync_region_sizes();
        None
    }

    /// Removes `key` from whichever region holds it, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let record = self.store.remove(key)?;
        match record.residency {
            Residency::Cold => self.cold.unlink(record.node),
            Residency::Hot => self.hot.unlink(record.node),
        };
        self.sync_region_sizes();
        Some(record.value)
    }

    /// Returns true if `key` is resident, without counting an access.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.contains(key)
    }

    /// Drops every record from both regions. Metrics counters other than
    /// the region sizes are preserved.
    pub fn clear(&mut self) {
        self.store.clear();
        self.cold.clear();
        self.hot.clear();
        self.sync_region_sizes();
    }

    /// Total number of resident records across both regions.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Maximum number of records the cache holds.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// The promotion threshold.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Number of records currently in the cold region.
    pub fn cold_len(&self) -> usize {
        self.cold.len()
    }

    /// Number of records currently in the hot region.
    pub fn hot_len(&self) -> usize {
        self.hot.len()
    }

    /// The cold region's bound; the total capacity in shared-pool mode.
    pub fn cold_capacity(&self) -> usize {
        self.config.cold_capacity()
    }

    /// The hot region's bound; the total capacity in shared-pool mode.
    pub fn hot_capacity(&self) -> usize {
        self.config.hot_capacity()
    }

    /// Returns true when each region enforces its own capacity.
    pub fn is_partitioned(&self) -> bool {
        self.config.partitioned
    }

    /// The configuration the cache was built from.
    pub fn config(&self) -> &LrukCacheConfig {
        &self.config
    }

    /// Counts an access on a resident key: raise the count, then promote
    /// or re-rank depending on where the record lives.
    fn touch<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (access_count, residency, node) = match self.store.lookup_mut(key) {
            Some(record) => {
                record.access_count += 1;
                (record.access_count, record.residency, record.node)
            }
            None => return,
        };
        match residency {
            Residency::Cold => {
                if access_count >= self.config.k as u64 {
                    self.promote(key);
                }
            }
            Residency::Hot => self.hot.move_to_front(node),
        }
    }

    /// Moves a cold record to the hot MRU position, making room in the
    /// hot region first when it enforces its own cap.
    fn promote<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = match self.store.lookup(key) {
            Some(record) => record.node,
            None => return,
        };
        let owned_key = match self.cold.unlink(node) {
            Some(owned_key) => owned_key,
            None => return,
        };
        if self.config.partitioned {
            let hot_capacity = self.config.hot_capacity();
            if hot_capacity == 0 {
                // capacity 1 leaves no hot slots; the record cannot stay
                // resident once it outgrows the cold queue.
                self.store.remove(key);
                self.metrics.record_hot_eviction();
                return;
            }
            if self.hot.len() >= hot_capacity {
                self.evict_hot_lru();
            }
        }
        let new_node = self.hot.push_front(owned_key);
        if let Some(record) = self.store.lookup_mut(key) {
            record.residency = Residency::Hot;
            record.node = new_node;
        }
        self.metrics.record_promotion();
    }

    /// Evicts the oldest cold record. Returns false if the queue is empty.
    fn evict_cold_oldest(&mut self) -> bool {
        match self.cold.pop_front() {
            Some(victim) => {
                self.store.remove(&victim);
                self.metrics.record_cold_eviction();
                true
            }
            None => false,
        }
    }

    /// Evicts the least recently used hot record. Returns false if the
    /// region is empty.
    fn evict_hot_lru(&mut self) -> bool {
        match self.hot.pop_back() {
            Some(victim) => {
                self.store.remove(&victim);
                self.metrics.record_hot_eviction();
                true
            }
            None => false,
        }
    }

    /// Global eviction for a new admission: the cold queue pays first,
    /// the hot region only when no cold record exists.
    fn evict_any(&mut self) {
        if !self.evict_cold_oldest() {
            self.evict_hot_lru();
        }
    }

    fn sync_region_sizes(&mut self) {
        self.metrics
            .update_region_sizes(self.cold.len() as u64, self.hot.len() as u64);
    }
}

impl<K, V, S> fmt::Debug for LrukCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LrukCache")
            .field("capacity", &self.config.capacity)
            .field("k", &self.config.k)
            .field("cold_len", &self.cold.len())
            .field("hot_len", &self.hot.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> CacheMetrics for LrukCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}
