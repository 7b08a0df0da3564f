//! Runs the taskdesk HTTP API.
//!
//! Configuration is read from the environment (and a `.env` file when
//! present); see [`taskdesk::config`] for the recognised variables. Log
//! output is controlled with `RUST_LOG`.

use taskdesk::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdesk=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().inspect_err(|error| {
        tracing::error!(%error, "configuration error");
    })?;
    taskdesk::server::serve(config).await?;
    Ok(())
}
