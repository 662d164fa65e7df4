//! Stanza Smoke Test Runner
//!
//! Checks a running analysis service end to end with a fixed Persian sentence.
//!
//! Usage:
//!   run_smoke_tests                      (exit code 0 = pass)
//!   cargo test -p smoke-tests -- --ignored  (same check as a test)
//!
//! Environment (also read from .env):
//!   STANZA_BASE_URL         default http://localhost:8088
//!   STANZA_REQUEST_TIMEOUT  seconds, default none


use anyhow::{Context, Result};
use stanza_client::{Config, StanzaClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "run_smoke_tests=info,stanza_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        url = %config.analyze_url(),
        timeout = ?config.request_timeout_seconds,
        "Running Persian smoke test"
    );

    let client = StanzaClient::new(&config).context("Failed to create analysis client")?;

    if let Err(e) = persian::run(&client).await {
        let error = format!("{:#}", e);
        tracing::error!(error = %error, "Smoke test failed");
        return Err(e);
    }

    Ok(())
}
