// src/main.rs
use clap::Parser;
use tokio_util::sync::CancellationToken;

use matchday::cli::Args;
use matchday::commands;
use matchday::config::Config;
use matchday::data_fetcher::api::ApiClient;
use matchday::error::AppError;
use matchday::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    commands::validate_args(&args)?;

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration and favorites maintenance never touch the network
    if commands::handle_config_commands(&args).await? {
        return Ok(());
    }
    if commands::handle_favorites_commands(&args).await? {
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let client = ApiClient::new(&config)?;

    // Ctrl-C abandons queued and in-flight requests through the same token
    // the fetch operations observe.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received, abandoning outstanding requests");
                cancel.cancel();
            }
        });
    }

    commands::run(&args, &config, &client, &cancel).await
}
