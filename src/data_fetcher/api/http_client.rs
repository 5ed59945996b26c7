//! HTTP client creation and API client wiring
//!
//! [`ApiClient`] bundles the pooled reqwest client with the request
//! governor. Every fetch in this crate borrows an `ApiClient`; nothing
//! talks to the network around the governor.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::governor::RequestGovernor;

/// Header the provider expects the auth token in
const AUTH_HEADER: &str = "X-Auth-Token";

/// Creates a properly configured HTTP client with connection pooling and
/// timeout handling. The provider's auth token is attached as a default
/// header so individual call sites cannot forget it.
///
/// # Returns
/// * `Result<Client, AppError>` - A configured reqwest HTTP client or error
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    if !config.api_token.is_empty() {
        let mut value = HeaderValue::from_str(&config.api_token)
            .map_err(|e| AppError::config_error(format!("Invalid API token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTH_HEADER, value);
    }

    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()
        .map_err(AppError::ApiFetch)
}

/// The one gateway to the football data provider: a pooled HTTP client
/// behind the process-wide request governor.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    governor: RequestGovernor,
}

impl ApiClient {
    /// Builds the client and its governor from configuration.
    ///
    /// # Errors
    /// * `AppError::Config` - governor parameters are non-positive or the
    ///   API token is not a valid header value
    /// * `AppError::ApiFetch` - the underlying HTTP client failed to build
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client(config)?;
        let governor = RequestGovernor::new(
            config.max_concurrent_requests,
            Duration::from_millis(config.request_spacing_ms),
        )?;
        Ok(Self { http, governor })
    }

    /// The underlying HTTP client. Cheap to clone per request.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// The request governor gating all outbound calls
    pub fn governor(&self) -> &RequestGovernor {
        &self.governor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_token: "test-token".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_api_client_from_valid_config() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(
            client.governor().max_concurrent(),
            crate::constants::governor::DEFAULT_MAX_CONCURRENT
        );
        assert_eq!(
            client.governor().dispatch_interval(),
            Duration::from_millis(crate::constants::governor::DEFAULT_SPACING_MS)
        );
    }

    #[tokio::test]
    async fn test_api_client_rejects_zero_ceiling() {
        let config = Config {
            max_concurrent_requests: 0,
            ..test_config()
        };
        let result = ApiClient::new(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_api_client_rejects_zero_spacing() {
        let config = Config {
            request_spacing_ms: 0,
            ..test_config()
        };
        let result = ApiClient::new(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_api_client_rejects_malformed_token() {
        let config = Config {
            api_token: "token\nwith\nnewlines".to_string(),
            ..Config::default()
        };
        let result = ApiClient::new(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_token_builds_without_header() {
        // Useful against mock servers in tests and local fixtures
        let config = Config::default();
        assert!(ApiClient::new(&config).is_ok());
    }
}
