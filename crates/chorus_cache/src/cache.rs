//! Weak identity cache implementation.

use derive_getters::Getters;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Configuration for an identity cache.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Entry count above which dead entries are swept on insert
    #[serde(default = "default_sweep_threshold")]
    #[builder(default = "default_sweep_threshold()")]
    sweep_threshold: usize,
}

fn default_sweep_threshold() -> usize {
    256
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_threshold: default_sweep_threshold(),
        }
    }
}

/// Counters describing cache behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    swept: u64,
}

/// Weak index from a stable record id to the single live wrapper for it.
///
/// The cache never owns a wrapper: it stores [`Weak`] references, so a wrapper
/// is reclaimed as soon as the application drops its last handle. There is no
/// eviction API; dead entries are swept lazily.
///
/// Check-then-insert is atomic. The wrapper is built outside the lock (so a
/// constructor may itself materialize other entries, even the same key), and
/// the slot is re-checked before registering. If another wrapper won, the new
/// allocation is dropped and the winner is returned.
///
/// # Example
///
/// ```
/// use chorus_cache::{CacheConfig, IdentityCache};
/// use std::sync::Arc;
///
/// let cache: IdentityCache<u64, String> = IdentityCache::new("names", CacheConfig::default());
///
/// let first = cache.materialize(7, |_| true, || "general".to_string());
/// let second = cache.materialize(7, |_| true, || unreachable!("already cached"));
/// assert!(Arc::ptr_eq(&first, &second));
///
/// drop((first, second));
/// assert!(cache.get(&7).is_none());
/// ```
pub struct IdentityCache<K, V> {
    name: &'static str,
    config: CacheConfig,
    entries: Mutex<HashMap<K, Weak<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    swept: AtomicU64,
}

impl<K, V> IdentityCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create an empty cache. `name` labels log events.
    pub fn new(name: &'static str, config: CacheConfig) -> Self {
        tracing::debug!(
            cache = name,
            sweep_threshold = config.sweep_threshold,
            "Creating new IdentityCache"
        );
        Self {
            name,
            config,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            swept: AtomicU64::new(0),
        }
    }

    /// The live wrapper for `key`, without constructing one.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.lock().get(key).and_then(Weak::upgrade)
    }

    /// Return the live wrapper for `key`, or build and register one.
    ///
    /// `is_current` decides whether a live wrapper still represents the record
    /// being materialized (e.g. the store has not swapped in a new record under
    /// the same id). A wrapper that fails the check is replaced.
    #[tracing::instrument(
        level = "trace",
        skip(self, is_current, build),
        fields(cache = self.name, key = ?key)
    )]
    pub fn materialize<C, B>(&self, key: K, is_current: C, build: B) -> Arc<V>
    where
        C: Fn(&V) -> bool,
        B: FnOnce() -> V,
    {
        if let Some(existing) = self.live_current(&key, &is_current) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return existing;
        }

        let built = Arc::new(build());

        let mut entries = self.entries.lock();
        if let Some(existing) = entries
            .get(&key)
            .and_then(Weak::upgrade)
            .filter(|v| is_current(v))
        {
            tracing::debug!(cache = self.name, "Concurrent materialization won, discarding duplicate");
            self.hits.fetch_add(1, Ordering::Relaxed);
            return existing;
        }

        entries.insert(key, Arc::downgrade(&built));
        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(cache = self.name, entries = entries.len(), "Registered new wrapper");

        if entries.len() > self.config.sweep_threshold {
            let removed = Self::sweep_locked(&mut entries);
            self.swept.fetch_add(removed as u64, Ordering::Relaxed);
        }

        built
    }

    fn live_current<C>(&self, key: &K, is_current: &C) -> Option<Arc<V>>
    where
        C: Fn(&V) -> bool,
    {
        let existing = self.get(key)?;
        if is_current(&existing) {
            Some(existing)
        } else {
            tracing::debug!(cache = self.name, key = ?key, "Backing record replaced, rebuilding wrapper");
            None
        }
    }

    fn sweep_locked(entries: &mut HashMap<K, Weak<V>>) -> usize {
        let before = entries.len();
        entries.retain(|_, wrapper| wrapper.strong_count() > 0);
        before - entries.len()
    }

    /// Drop entries whose wrapper is gone. Live wrappers are never touched.
    pub fn sweep(&self) -> usize {
        let removed = Self::sweep_locked(&mut self.entries.lock());
        self.swept.fetch_add(removed as u64, Ordering::Relaxed);
        if removed > 0 {
            tracing::info!(cache = self.name, removed, "Swept dead cache entries");
        }
        removed
    }

    /// Number of entries, live or dead.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the cache has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of entries whose wrapper is still alive.
    pub fn live_count(&self) -> usize {
        self.entries
            .lock()
            .values()
            .filter(|wrapper| wrapper.strong_count() > 0)
            .count()
    }

    /// Hit, miss and sweep counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            swept: self.swept.load(Ordering::Relaxed),
        }
    }

    /// Cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
