//! Injectable cache abstraction backed by any key-value store

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimal key-value cache surface. Implementations decide storage; the
/// engine only ever stores JSON values with a TTL.
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn put(&self, key: &str, value: Value, ttl: Duration);
}

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// In-process TTL cache, good enough for a single engine instance
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: Value, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

/// Cache that stores nothing; used when caching is disabled
pub struct NoopCache;

impl Cache for NoopCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn put(&self, _key: &str, _value: Value, _ttl: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_then_get() {
        let cache = MemoryCache::new();
        cache.put("k", json!({"n": 1}), Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(json!({"n": 1})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = MemoryCache::new();
        cache.put("k", json!(true), Duration::from_secs(0));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(MemoryCache::new().get("nope"), None);
    }

    #[test]
    fn test_noop_cache_never_stores() {
        let cache = NoopCache;
        cache.put("k", json!(1), Duration::from_secs(60));
        assert_eq!(cache.get("k"), None);
    }
}
