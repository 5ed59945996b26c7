use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_token;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API domain for fetching football data. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Auth token sent as X-Auth-Token with every request.
    #[serde(default)]
    pub api_token: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// How many outbound calls the request governor admits at once.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_requests: usize,
    /// Minimum spacing between two governed dispatches, in milliseconds.
    /// Together with the ceiling this must keep the client under the
    /// provider's published rate limit.
    #[serde(default = "default_request_spacing_ms")]
    pub request_spacing_ms: u64,
}

/// Default API domain
fn default_api_domain() -> String {
    crate::constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Default governor concurrency ceiling
fn default_max_concurrent() -> usize {
    crate::constants::governor::DEFAULT_MAX_CONCURRENT
}

/// Default governor dispatch spacing in milliseconds
fn default_request_spacing_ms() -> u64 {
    crate::constants::governor::DEFAULT_SPACING_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            api_token: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_concurrent_requests: default_max_concurrent(),
            request_spacing_ms: default_request_spacing_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for an API token and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MATCHDAY_API_DOMAIN` - Override API domain
    /// - `MATCHDAY_API_TOKEN` - Override API auth token
    /// - `MATCHDAY_LOG_FILE` - Override log file path
    /// - `MATCHDAY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `MATCHDAY_MAX_CONCURRENT` - Override the governor concurrency ceiling
    /// - `MATCHDAY_REQUEST_SPACING_MS` - Override the governor dispatch spacing
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            // Check if the token is provided via environment variable
            if let Ok(api_token) = std::env::var(crate::constants::env_vars::API_TOKEN) {
                Config {
                    api_token,
                    ..Config::default()
                }
            } else {
                let api_token = prompt_for_api_token().await?;

                let config = Config {
                    api_token,
                    ..Config::default()
                };

                config.save().await?;
                config
            }
        };

        // Override with environment variables if present
        if let Ok(api_domain) = std::env::var(crate::constants::env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(api_token) = std::env::var(crate::constants::env_vars::API_TOKEN) {
            config.api_token = api_token;
        }

        if let Ok(log_file_path) = std::env::var(crate::constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(crate::constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        if let Some(max_concurrent) = std::env::var(crate::constants::env_vars::MAX_CONCURRENT)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            config.max_concurrent_requests = max_concurrent;
        }

        if let Some(spacing) = std::env::var(crate::constants::env_vars::REQUEST_SPACING_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.request_spacing_ms = spacing;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.log_file_path,
            self.max_concurrent_requests,
            self.request_spacing_ms,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures api_domain has https:// prefix
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("API Token:");
            if config.api_token.is_empty() {
                println!("(not set)");
            } else {
                println!("(set, {} characters)", config.api_token.len());
            }
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Request Governor:");
            println!(
                "{} concurrent, {} ms between dispatches",
                config.max_concurrent_requests, config.request_spacing_ms
            );
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/matchday.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has the proper https:// prefix.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            api_token: self.api_token.clone(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
            max_concurrent_requests: self.max_concurrent_requests,
            request_spacing_ms: self.request_spacing_ms,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
