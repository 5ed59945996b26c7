//! Football scores, standings and scorers in your terminal
//!
//! This library wraps a rate-limited football data API behind a single
//! governed client: every outbound call is queued, admitted at a bounded
//! concurrency and paced to a minimum spacing, so any number of concurrent
//! fetches stays under the provider's quota.
//!
//! # Examples
//!
//! ```rust,no_run
//! use matchday::config::Config;
//! use matchday::data_fetcher::api::{ApiClient, fetch_matches};
//! use matchday::error::AppError;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::new(&config)?;
//!     let token = CancellationToken::new();
//!
//!     let listing = fetch_matches(
//!         &client,
//!         &config,
//!         "2026-08-08",
//!         "2026-08-08",
//!         &["PL".to_string()],
//!         &token,
//!     )
//!     .await?;
//!
//!     for game in &listing.matches {
//!         println!(
//!             "{} {} - {}",
//!             game.utc_date,
//!             game.home_team.display_name(),
//!             game.away_team.display_name()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod favorites;
pub mod governor;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{ApiClient, fetch_match, fetch_matches};
pub use data_fetcher::models::{Match, MatchesResponse, StandingsResponse, TeamDetail};
pub use error::AppError;
pub use favorites::Favorites;
pub use governor::RequestGovernor;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
