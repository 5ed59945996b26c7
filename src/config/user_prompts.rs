//! User interaction and prompts for configuration setup
//!
//! This module handles user prompts and input collection for configuration
//! initialization when config files don't exist or need user input.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for an API auth token and returns the trimmed input.
///
/// This function displays a prompt asking for the provider's API token and
/// waits for user input from stdin. It handles the asynchronous input
/// reading and returns the trimmed input string.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_api_token() -> Result<String, AppError> {
    println!("Please enter your football-data API token: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
