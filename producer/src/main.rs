//! Task Producer - publishes a persistent task to `task_queue` every 100ms.
//!
//! Startup failures (connect, channel, declare) are logged and end the
//! process with a non-zero status. Once publishing, the producer runs until
//! it is killed.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use producer::{bootstrap, shutdown_channel, Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("producer_starting");

    // Load configuration from environment
    let config = Config::from_env();
    info!(
        host = %config.rabbitmq_host,
        user_set = !config.rabbitmq_user.is_empty(),
        password_set = !config.rabbitmq_password.is_empty(),
        "config_loaded"
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "producer_fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let publisher = bootstrap(&config)
        .await
        .context("Failed to set up the task queue")?;

    // Nothing ever signals shutdown; the sender is held so the loop runs
    // until the process is killed.
    let (_shutdown, token) = shutdown_channel();

    let stats = publisher.run(token).await;

    publisher.into_broker().close().await;

    info!(sent = stats.sent, failed = stats.failed, "producer_shutdown_complete");
    Ok(())
}
