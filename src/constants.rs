//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default API domain when the config file does not override it
pub const DEFAULT_API_DOMAIN: &str = "https://api.football-data.org/v4";

/// Request governor defaults
///
/// The product of these two values must stay under the provider's published
/// quota. One in-flight call every 6 seconds keeps a client at or below
/// 10 calls/minute, which matches the most restrictive known tier. Both are
/// plain configuration, overridable per install.
pub mod governor {
    /// Default number of concurrently admitted outbound calls
    pub const DEFAULT_MAX_CONCURRENT: usize = 1;

    /// Default minimum spacing between two dispatches (milliseconds)
    pub const DEFAULT_SPACING_MS: u64 = 6000;
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for match listings that contain live matches. Short enough that
    /// score changes show up quickly without hammering the provider.
    pub const LIVE_MATCHES_SECONDS: u64 = 30;

    /// TTL for match listings without live matches (5 minutes)
    pub const MATCH_LIST_SECONDS: u64 = 300;

    /// TTL for single-match detail (5 minutes)
    pub const MATCH_DETAIL_SECONDS: u64 = 300;

    /// TTL for standings and scorer tables (30 minutes)
    pub const TABLE_SECONDS: u64 = 1800;

    /// TTL for team and person lookups (24 hours)
    pub const PEOPLE_SECONDS: u64 = 86400;

    /// Default TTL for HTTP responses that match no specific rule (10 minutes)
    pub const HTTP_RESPONSE_SECONDS: u64 = 600;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "MATCHDAY_API_DOMAIN";

    /// Environment variable for the API auth token
    pub const API_TOKEN: &str = "MATCHDAY_API_TOKEN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "MATCHDAY_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "MATCHDAY_HTTP_TIMEOUT";

    /// Environment variable for the governor concurrency ceiling
    pub const MAX_CONCURRENT: &str = "MATCHDAY_MAX_CONCURRENT";

    /// Environment variable for the governor dispatch spacing in milliseconds
    pub const REQUEST_SPACING_MS: &str = "MATCHDAY_REQUEST_SPACING_MS";
}

/// Retry configuration for the layer above the governor. The governor itself
/// never retries; every attempt is a fresh work item.
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Maximum delay between retries (seconds)
    pub const MAX_DELAY_SECONDS: u64 = 30;

    /// Jitter range applied to backoff (+/- percentage of the computed delay).
    /// Use 20% to avoid thundering herd across clients.
    pub const JITTER_FRACTION: f64 = 0.2;
}

/// Scorer listing tuning
pub mod scorers {
    /// Default number of scorers requested from the provider
    pub const DEFAULT_LIMIT: u32 = 10;
}
