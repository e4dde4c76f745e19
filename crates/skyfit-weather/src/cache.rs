//! TTL cache for API responses.
//!
//! Injected into callers rather than living in process-global state, so
//! tests can use their own instance with their own TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// A keyed cache whose entries expire `ttl` after insertion.
pub struct RequestCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> RequestCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a fresh value. Expired entries are removed on access.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if Instant::now() <= entry.expires_at => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        None
    }

    /// Store a value, stamping it with the cache's TTL.
    pub fn insert(&self, key: impl Into<String>, value: T) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_fresh_value() {
        let cache = RequestCache::new(Duration::from_secs(60));
        cache.insert("seattle", 18);
        assert_eq!(cache.get("seattle"), Some(18));
        assert_eq!(cache.get("portland"), None);
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = RequestCache::new(Duration::ZERO);
        cache.insert("seattle", 18);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("seattle"), None);
        // A second read still misses; the entry was removed, not just hidden.
        assert_eq!(cache.get("seattle"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let cache = RequestCache::new(Duration::from_secs(60));
        cache.insert("seattle", 18);
        cache.insert("seattle", 21);
        assert_eq!(cache.get("seattle"), Some(21));
    }

    #[test]
    fn test_clear() {
        let cache = RequestCache::new(Duration::from_secs(60));
        cache.insert("seattle", 18);
        cache.clear();
        assert_eq!(cache.get("seattle"), None);
    }
}
