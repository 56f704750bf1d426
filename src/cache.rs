//! Time-bucketed caching of decoded content.
//!
//! [`LruStore`] is a fixed-capacity, thread-safe LRU that any number of
//! caches may share. [`BucketCache`] keys it by client identity, resource
//! URL and a coarse time bucket, so entries stop matching once the clock
//! crosses a bucket boundary and age out of the store under LRU pressure.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lru::LruCache;

use crate::content::FantasyContent;


/// A payload held by an [`LruStore`].
///
/// The store is payload-agnostic; readers match on the variant they own
/// and treat every other kind as absent.
#[derive(Debug, Clone)]
pub enum StoreValue {
    /// A decoded response document.
    Content(Arc<FantasyContent>),
    /// An uninterpreted text payload.
    Text(Arc<str>),
}

impl StoreValue {
    /// Weight charged against store capacity. Every payload costs one
    /// unit, so capacity bounds the entry count rather than byte size.
    pub fn weight(&self) -> usize {
        1
    }
}

/// Fixed-capacity LRU store, safe for concurrent use.
pub struct LruStore {
    entries: Mutex<LruCache<String, StoreValue>>,
}

impl LruStore {
    /// Create a store holding at most `capacity` unit-weight entries.
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up `key`, marking the entry most recently used.
    pub fn get(&self, key: &str) -> Option<StoreValue> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Insert or overwrite `key`, evicting the least recently used entry
    /// once capacity is exceeded.
    pub fn put(&self, key: String, value: StoreValue) {
        self.entries.lock().unwrap().put(key, value);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read/write view of cached content at a point in time.
pub trait ContentCache: Send + Sync {
    /// Cached document for `resource` as of `at`, if still fresh.
    fn get(&self, resource: &str, at: SystemTime) -> Option<Arc<FantasyContent>>;

    /// Store `content` for `resource` as of `at`.
    fn set(&self, resource: &str, at: SystemTime, content: Arc<FantasyContent>);
}

/// Cache keyed by client identity, resource and a coarse time bucket.
///
/// Two lookups whose timestamps land in the same bucket observe the same
/// entry; a lookup in a later bucket misses and leaves the stale entry to
/// LRU eviction.
pub struct BucketCache {
    client_id: String,
    width: Duration,
    store: Arc<LruStore>,
}

impl BucketCache {
    /// `width` is the freshness window; timestamps are truncated to
    /// multiples of it when keys are derived.
    pub fn new(client_id: impl Into<String>, width: Duration, store: Arc<LruStore>) -> Self {
        Self {
            client_id: client_id.into(),
            width,
            store,
        }
    }

    /// The store backing this cache.
    pub fn store(&self) -> &Arc<LruStore> {
        &self.store
    }

    fn key(&self, resource: &str, at: SystemTime) -> String {
        let seconds = at.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        let bucket = seconds / self.width.as_secs().max(1);
        format!("{}:{}:{}", self.client_id, resource, bucket)
    }
}

impl ContentCache for BucketCache {
    fn get(&self, resource: &str, at: SystemTime) -> Option<Arc<FantasyContent>> {
        match self.store.get(&self.key(resource, at)) {
            Some(StoreValue::Content(content)) => Some(content),
            // A payload of any other kind under our key reads as a miss.
            Some(_) => None,
            None => None,
        }
    }

    fn set(&self, resource: &str, at: SystemTime, content: Arc<FantasyContent>) {
        self.store
            .put(self.key(resource, at), StoreValue::Content(content));
    }
}
