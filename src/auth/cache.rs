//! Token cache abstraction.
//!
//! The access token outlives any single [`PinmetoClient`](crate::PinmetoClient):
//! it is stored in a [`TokenCache`] handed to the client, so several clients
//! (or processes, with a distributed implementation) can share one token.
//!
//! Reads and writes are not coordinated. Two callers that both miss will both
//! fetch a token and the last write wins; every fetched token is valid, so
//! this only costs a redundant token request.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Key-value store with per-entry expiry, used to hold the access token.
///
/// Implementations must treat an expired entry exactly like a missing one.
///
/// # Example
///
/// ```rust
/// use pinmeto_api::auth::{InMemoryTokenCache, TokenCache};
/// use std::time::Duration;
///
/// let cache = InMemoryTokenCache::new();
/// assert!(!cache.has("token"));
///
/// cache.put("token", "abc".to_string(), Some(Duration::from_secs(3600)));
/// assert_eq!(cache.get("token").as_deref(), Some("abc"));
/// ```
pub trait TokenCache: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// With `ttl` set to `None` the entry never expires on its own.
    fn put(&self, key: &str, value: String, ttl: Option<Duration>);

    /// Returns `true` if a live value is stored under `key`.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

/// Process-local [`TokenCache`] backed by a locked `HashMap`.
///
/// Expired entries are ignored on read and replaced on the next write.
#[derive(Debug, Default)]
pub struct InMemoryTokenCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryTokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenCache for InMemoryTokenCache {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.is_live(Utc::now()))
            .map(|entry| entry.value.clone())
    }

    fn put(&self, key: &str, value: String, ttl: Option<Duration>) {
        let now = Utc::now();
        // A TTL too large for chrono is treated as no expiry.
        let expires_at = ttl.and_then(|ttl| {
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|ttl| now.checked_add_signed(ttl))
        });

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), CacheEntry { value, expires_at });
    }
}

// Verify InMemoryTokenCache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InMemoryTokenCache>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_has_nothing() {
        let cache = InMemoryTokenCache::new();
        assert!(!cache.has("_pinmeto_token"));
        assert!(cache.get("_pinmeto_token").is_none());
    }

    #[test]
    fn test_put_then_get_within_ttl() {
        let cache = InMemoryTokenCache::new();
        cache.put("k", "v".to_string(), Some(Duration::from_secs(60)));

        assert!(cache.has("k"));
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let cache = InMemoryTokenCache::new();
        cache.put("k", "v".to_string(), Some(Duration::ZERO));

        assert!(!cache.has("k"));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = InMemoryTokenCache::new();
        cache.put("k", "v".to_string(), Some(Duration::from_millis(20)));
        assert!(cache.has("k"));

        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let cache = InMemoryTokenCache::new();
        cache.put("k", "v".to_string(), None);
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_put_overwrites_previous_value() {
        let cache = InMemoryTokenCache::new();
        cache.put("k", "first".to_string(), Some(Duration::ZERO));
        cache.put("k", "second".to_string(), Some(Duration::from_secs(60)));

        assert_eq!(cache.get("k").as_deref(), Some("second"));
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = InMemoryTokenCache::new();
        cache.put("a", "1".to_string(), None);

        assert!(cache.has("a"));
        assert!(!cache.has("b"));
    }
}
