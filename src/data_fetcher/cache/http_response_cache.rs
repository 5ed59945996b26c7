use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

// Import cache types from sibling module
use super::types::CachedHttpResponse;

/// Number of response bodies kept before least-recently-used eviction
const CACHE_CAPACITY: usize = 100;

// LRU cache structure for HTTP responses with TTL support
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| RwLock::new(LruCache::new(NonZeroUsize::new(CACHE_CAPACITY).unwrap())));

/// Caches HTTP response data with TTL
#[instrument(skip(url, data), fields(url = %url))]
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    let data_size = data.len();

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url.clone(), cached_data);

    debug!(
        "Cached HTTP response: url={}, data_size={}, ttl={}s",
        url, data_size, ttl_seconds
    );
}

/// Retrieves cached HTTP response if it's not expired
#[instrument(skip(url), fields(url = %url))]
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    if let Some(cached_entry) = cache.get(url) {
        if !cached_entry.is_expired() {
            debug!(
                "Cache hit for HTTP response: url={}, age={:?}",
                url,
                cached_entry.cached_at.elapsed()
            );
            return Some(cached_entry.data.clone());
        }

        // Remove expired entry
        warn!(
            "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
            url,
            cached_entry.cached_at.elapsed(),
            Duration::from_secs(cached_entry.ttl_seconds)
        );
        cache.pop(url);
    } else {
        debug!("Cache miss for HTTP response: url={}", url);
    }

    None
}

/// Gets the current HTTP response cache size for monitoring purposes
pub async fn get_http_response_cache_size() -> usize {
    HTTP_RESPONSE_CACHE.read().await.len()
}

/// Clears all HTTP response cache entries
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}
