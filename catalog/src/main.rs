//! Catalog command runner
//!
//! Reads one JSON upsert command per line on stdin and writes one JSON result
//! per line on stdout. All collaborators are built once here and handed to the
//! use case on every call.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog::adapters::DefaultUpsertProductDeps;
use catalog::config::Config;
use catalog::{upsert_product, UpsertProductCommand, UpsertProductResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;
    tracing::info!(notifier = %config.notifier, "Starting catalog...");

    let deps = DefaultUpsertProductDeps::from_config(&config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<UpsertProductCommand>(&line) {
            Ok(command) => upsert_product(&deps, command).await,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed command");
                UpsertProductResult::failed(format!("Invalid command: {}", e))
            }
        };

        let mut out = serde_json::to_string(&result)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}
