use std::time::{Duration, Instant};

/// A raw HTTP response body cached with a time-to-live
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    /// Whether the entry has outlived its TTL
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() >= Duration::from_secs(self.ttl_seconds)
    }
}
