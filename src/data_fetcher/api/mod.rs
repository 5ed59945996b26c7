pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export the API client
pub use http_client::{ApiClient, create_http_client};
// Re-export core API operations
pub use core::*;
