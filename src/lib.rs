#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Operation | Effect | Time |
//! |-----------|--------|------|
//! | [`LrukCache::get`] | Counts an access; may promote cold records | O(1) |
//! | [`LrukCache::put`] | Inserts cold or overwrites in place; may evict | O(1) |
//! | [`LrukCache::peek`] | Reads without counting an access | O(1) |
//! | [`LrukCache::remove`] | Removes from whichever region holds the key | O(1) |
//!
//! ## Choosing a Capacity Mode
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Do one-off scans share the cache with a stable working set?      │
//! │                                                                   │
//! │   Yes ──▶ partitioned = true  (default)                           │
//! │           The cold cap bounds how much of the cache a scan        │
//! │           can ever claim.                                         │
//! │                                                                   │
//! │   No  ──▶ partitioned = false                                     │
//! │           The regions share one pool; the hot set may grow to     │
//! │           the full capacity when re-access dominates.             │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lruk_cache::LrukCache;
//!
//! let mut cache: LrukCache<&str, i32> = LrukCache::new(4).unwrap();
//! cache.put("a", 1);     // admitted cold, seen once
//! cache.get(&"a");       // second access: promoted to the hot region
//! cache.put("b", 2);
//! cache.put("c", 3);     // cold cap reached, "b" evicted oldest-first
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```
//!
//! ## Modules
//!
//! - [`lruk`]: the LRU-K cache implementation
//! - [`config`]: configuration struct and validation
//! - [`error`]: construction and admission errors
//! - [`metrics`]: metrics collection and reporting

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Doubly linked list on a slot arena with stable integer handles.
///
/// Internal infrastructure shared by both cache regions; not part of the
/// public API.
pub(crate) mod list;

/// Cache configuration structure and validation.
pub mod config;

/// Error types for construction and admission.
pub mod error;

/// LRU-K cache implementation.
///
/// A fixed-size, scan-resistant cache that admits new keys into a FIFO
/// cold queue and promotes them to an LRU hot region on their `k`-th
/// access.
pub mod lruk;

/// Record store mapping each resident key to its value, access count,
/// and region position.
pub(crate) mod store;

/// Cache metrics system.
///
/// Per-region hit, eviction, and promotion counters reported through a
/// deterministic BTreeMap interface.
pub mod metrics;

// Re-export the public surface
pub use config::LrukCacheConfig;
pub use error::{CacheError, ConfigError};
pub use lruk::LrukCache;
pub use metrics::{CacheMetrics, LrukCacheMetrics};
