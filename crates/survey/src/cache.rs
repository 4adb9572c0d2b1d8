//! Bounded position-keyed cache for envelope results.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use shot_ballistics::Envelope;

/// Positions are quantized to millimetres before keying, so nearby queries
/// share an entry and the key space stays bounded.
const KEY_SCALE: f64 = 1_000.0;

/// Default entry capacity.
pub const DEFAULT_CAPACITY: usize = 512;

/// Hit/miss accounting, mostly for tests and CLI summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<(i64, i64), Arc<Envelope>>,
    order: VecDeque<(i64, i64)>,
    stats: CacheStats,
}

/// Bounded envelope cache with oldest-first eviction.
///
/// The cache is owned by the survey layer, not the solver; interior state
/// sits behind a mutex so concurrent readers and writers stay consistent.
/// Capacity is fixed at construction and the oldest entry is dropped when
/// a new key would exceed it.
#[derive(Debug)]
pub struct EnvelopeCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl EnvelopeCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Create a cache with [`DEFAULT_CAPACITY`] entries.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    fn key(x_m: f64, y_m: f64) -> (i64, i64) {
        (
            (x_m * KEY_SCALE).round() as i64,
            (y_m * KEY_SCALE).round() as i64,
        )
    }

    /// Return the cached envelope for the quantized position, computing and
    /// inserting it on a miss.
    ///
    /// `compute` runs outside the lock; two racing callers may both compute
    /// the same entry, but only one insertion wins and both results are
    /// identical, so the race is benign.
    pub fn get_or_compute<F>(&self, x_m: f64, y_m: f64, compute: F) -> Arc<Envelope>
    where
        F: FnOnce() -> Envelope,
    {
        let key = Self::key(x_m, y_m);

        {
            let mut inner = self.inner.lock().expect("envelope cache poisoned");
            if let Some(hit) = inner.entries.get(&key).cloned() {
                inner.stats.hits += 1;
                return hit;
            }
        }

        let envelope = Arc::new(compute());

        let mut inner = self.inner.lock().expect("envelope cache poisoned");
        inner.stats.misses += 1;
        if !inner.entries.contains_key(&key) {
            if inner.entries.len() >= self.capacity {
                if let Some(oldest) = inner.order.pop_front() {
                    inner.entries.remove(&oldest);
                }
            }
            inner.order.push_back(key);
            inner.entries.insert(key, envelope.clone());
        }
        envelope
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("envelope cache poisoned").entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().expect("envelope cache poisoned").stats
    }
}
