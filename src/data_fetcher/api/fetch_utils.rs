//! Generic HTTP fetching utilities with caching, retry logic, and error handling

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::Rng;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{cache_ttl, retry};
use crate::data_fetcher::cache::{cache_http_response, get_cached_http_response};
use crate::data_fetcher::models::MatchesResponse;
use crate::error::AppError;

use super::http_client::ApiClient;

/// Generic fetch function with HTTP caching, retry logic, and comprehensive
/// error handling.
///
/// This function:
/// - Checks the HTTP response cache first; cache hits never reach the governor
/// - Submits every network attempt through the request governor, so bursts of
///   concurrent fetches stay under the provider's rate limit
/// - Retries transient failures with jittered exponential backoff; each retry
///   is a fresh work item, the governor itself never retries
/// - Caches successful responses with a TTL based on content
///
/// # Arguments
/// * `client` - API client carrying the HTTP transport and the governor
/// * `url` - URL to fetch data from
/// * `token` - cancellation token for abandoning the request
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client, token))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &ApiClient,
    url: &str,
    token: &CancellationToken,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    // Check HTTP response cache first
    if let Some(cached_response) = get_cached_http_response(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
                // Continue with fresh request if cached response is invalid
            }
        }
    }

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let mut rng = SmallRng::from_os_rng();
    let response_text = loop {
        let http = client.http().clone();
        let request_url = url.to_string();
        let outcome = client
            .governor()
            .submit(move || send_request(http, request_url), token)
            .await;

        match outcome {
            Ok(text) => break text,
            Err(e) if e.is_retryable() && attempt < retry::MAX_ATTEMPTS => {
                let wait = jittered(backoff, &mut rng);
                warn!(
                    "Transient error from {}: {}. Retrying in {:?} (attempt {}/{})",
                    url,
                    e,
                    wait,
                    attempt + 1,
                    retry::MAX_ATTEMPTS
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
                backoff = backoff
                    .saturating_mul(2)
                    .min(Duration::from_secs(retry::MAX_DELAY_SECONDS));
            }
            Err(e) => return Err(e),
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    let ttl_seconds = if url.contains("/matches/") {
        cache_ttl::MATCH_DETAIL_SECONDS
    } else if url.contains("/standings") || url.contains("/scorers") {
        cache_ttl::TABLE_SECONDS
    } else if url.contains("/teams/") || url.contains("/persons/") {
        cache_ttl::PEOPLE_SECONDS
    } else if url.contains("/matches?") {
        cache_ttl::MATCH_LIST_SECONDS
    } else {
        cache_ttl::HTTP_RESPONSE_SECONDS
    };

    // Listings with live matches go stale within a minute; shorten their TTL
    let final_ttl = if url.contains("/matches?") {
        match serde_json::from_str::<MatchesResponse>(&response_text) {
            Ok(listing) if listing.has_live_matches() => {
                info!(
                    "Live matches detected in response from {}, using short cache TTL",
                    url
                );
                cache_ttl::LIVE_MATCHES_SECONDS
            }
            _ => ttl_seconds,
        }
    } else {
        ttl_seconds
    };

    // Enhanced JSON parsing with more specific error handling
    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            // Cache only valid/parsable payloads; move the body (no clone)
            cache_http_response(url.to_string(), response_text, final_ttl).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Performs exactly one outbound GET and maps status codes onto the error
/// taxonomy. This is the work item handed to the governor: one invocation,
/// one network call, no retries inside.
async fn send_request(http: Client, url: String) -> Result<String, AppError> {
    let response = match http.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(&url))
            } else if e.is_connect() {
                Err(AppError::network_connection(&url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(&url),
            429 => AppError::api_rate_limit(reason, &url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, &url),
            400..=499 => AppError::api_client_error(status_code, reason, &url),
            _ => AppError::api_server_error(status_code, reason, &url),
        });
    }

    response.text().await.map_err(AppError::ApiFetch)
}

/// Spreads a backoff delay by the configured jitter fraction so parallel
/// clients do not retry in lockstep.
fn jittered(delay: Duration, rng: &mut SmallRng) -> Duration {
    let spread = retry::JITTER_FRACTION;
    let factor = 1.0 + rng.random_range(-spread..=spread);
    delay.mul_f64(factor.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_stays_within_fraction() {
        let mut rng = SmallRng::seed_from_u64(42);
        let base = Duration::from_millis(1000);
        for _ in 0..100 {
            let delay = jittered(base, &mut rng);
            let low = base.mul_f64(1.0 - retry::JITTER_FRACTION);
            let high = base.mul_f64(1.0 + retry::JITTER_FRACTION);
            assert!(delay >= low && delay <= high, "jitter out of range: {delay:?}");
        }
    }
}
