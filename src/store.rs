//! Record store: the single lookup index shared by both regions.
//!
//! Every resident key has exactly one [`Record`] here, regardless of which
//! region its ordering node lives in. All bookkeeping a lookup needs, the
//! value, the access count, the residency tag, and the node handle, sits in
//! one map entry so each cache operation touches the hash table once.

use crate::error::CacheError;
use crate::list::Handle;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Which region a record's ordering node currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residency {
    /// In the cold admission queue, seen fewer than `k` times.
    Cold,
    /// In the hot region, seen at least `k` times.
    Hot,
}

/// Per-key bookkeeping held by the store.
#[derive(Debug)]
pub struct Record<V> {
    /// The cached value.
    pub value: V,
    /// Lifetime access count while resident. Starts at 1 on admission and
    /// resets only when the key is evicted and later re-admitted.
    pub access_count: u64,
    /// Region the ordering node lives in.
    pub residency: Residency,
    /// Handle of the ordering node in that region's list.
    pub node: Handle,
}

/// Hash index from key to [`Record`].
pub struct RecordStore<K, V, S> {
    map: HashMap<K, Record<V>, S>,
    capacity: usize,
}

impl<K: Hash + Eq, V, S: BuildHasher> RecordStore<K, V, S> {
    /// Creates a store bounded at `capacity` records.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        RecordStore {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            capacity,
        }
    }

    /// Returns the record for `key`, if resident.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&Record<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    /// Returns a mutable record for `key`, if resident.
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut Record<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    /// Admits a new record in the cold region with an access count of 1.
    ///
    /// The caller must have made room first; `node` is the key's freshly
    /// pushed cold-queue node.
    pub fn insert(&mut self, key: K, value: V, node: Handle) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::CapacityExhausted);
        }
        debug_assert!(self.map.len() < self.capacity, "store admitted past capacity");
        self.map.insert(
            key,
            Record {
                value,
                access_count: 1,
                residency: Residency::Cold,
                node,
            },
        );
        Ok(())
    }

    /// Removes and returns the record for `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Record<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    /// Returns true if `key` is resident.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Number of resident records.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no records are resident.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The bound the store was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, V, S> fmt::Debug for RecordStore<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("len", &self.map.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::List;

    #[cfg(feature = "hashbrown")]
    use hashbrown::DefaultHashBuilder;
    #[cfg(not(feature = "hashbrown"))]
    use std::collections::hash_map::RandomState as DefaultHashBuilder;

    fn make_store(capacity: usize) -> RecordStore<&'static str, i32, DefaultHashBuilder> {
        RecordStore::with_hasher(capacity, DefaultHashBuilder::default())
    }

    #[test]
    fn test_insert_starts_cold_with_one_access() {
        let mut store = make_store(4);
        let mut cold: List<&str> = List::new();
        let node = cold.push_back("a");

        store.insert("a", 1, node).unwrap();
        let record = store.lookup(&"a").unwrap();
        assert_eq!(record.value, 1);
        assert_eq!(record.access_count, 1);
        assert_eq!(record.residency, Residency::Cold);
        assert_eq!(record.node, node);
    }

    #[test]
    fn test_zero_capacity_store_refuses_inserts() {
        let mut store = make_store(0);
        let mut cold: List<&str> = List::new();
        let node = cold.push_back("a");

        assert_eq!(store.insert("a", 1, node), Err(CacheError::CapacityExhausted));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_returns_record() {
        let mut store = make_store(4);
        let mut cold: List<&str> = List::new();
        store.insert("a", 7, cold.push_back("a")).unwrap();

        let record = store.remove(&"a").unwrap();
        assert_eq!(record.value, 7);
        assert!(store.remove(&"a").is_none());
        assert!(!store.contains(&"a"));
    }

    #[test]
    fn test_lookup_mut_updates_in_place() {
        let mut store = make_store(4);
        let mut cold: List<&str> = List::new();
        store.insert("a", 1, cold.push_back("a")).unwrap();

        {
            let record = store.lookup_mut(&"a").unwrap();
            record.access_count += 1;
            record.residency = Residency::Hot;
        }
        let record = store.lookup(&"a").unwrap();
        assert_eq!(record.access_count, 2);
        assert_eq!(record.residency, Residency::Hot);
    }

    #[test]
    fn test_clear() {
        let mut store = make_store(4);
        let mut cold: List<&str> = List::new();
        store.insert("a", 1, cold.push_back("a")).unwrap();
        store.insert("b", 2, cold.push_back("b")).unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 4);
    }
}
