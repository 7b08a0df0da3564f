//! Wiring of configuration, adapters and router into a running server.

use std::sync::Arc;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::{self, AppState, SharedTaskService};
use crate::config::{AppConfig, StorageConfig};
use crate::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        noop::DisabledNotifier,
        postgres::{PostgresTaskRepository, TaskPgPool, apply_schema},
        slack::SlackNotifier,
    },
    ports::{TaskNotifier, TaskRepository, TaskRepositoryError},
    services::TaskService,
};

/// Errors that prevent the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The schema could not be applied.
    #[error("failed to prepare database schema: {0}")]
    Schema(#[from] TaskRepositoryError),
    /// Binding or serving the socket failed.
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the repository selected by `config`.
///
/// # Errors
///
/// Returns [`ServerError`] when the `PostgreSQL` pool cannot be created or
/// the schema cannot be applied.
pub async fn build_repository(config: &AppConfig) -> Result<Arc<dyn TaskRepository>, ServerError> {
    match &config.storage {
        StorageConfig::InMemory => {
            tracing::info!("using in-memory task storage");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let manager = ConnectionManager::<PgConnection>::new(database_url.as_str());
            let pool: TaskPgPool = Pool::builder()
                .max_size(*max_connections)
                .build(manager)?;
            apply_schema(&pool).await?;
            tracing::info!(max_connections, "using PostgreSQL task storage");
            Ok(Arc::new(PostgresTaskRepository::new(pool, config.timezone)))
        }
    }
}

/// Builds the notifier selected by `config`.
#[must_use]
pub fn build_notifier(config: &AppConfig) -> Arc<dyn TaskNotifier> {
    match &config.notifier {
        Some(settings) => {
            tracing::info!(
                endpoint = %settings.endpoint,
                channel = %settings.channel,
                "completion notifications enabled"
            );
            Arc::new(SlackNotifier::new(settings.clone()))
        }
        None => {
            tracing::warn!("SLACK_API_KEY not set; completion notifications disabled");
            Arc::new(DisabledNotifier)
        }
    }
}

/// Assembles the handler state from `config`.
///
/// # Errors
///
/// Returns [`ServerError`] when the repository cannot be built.
pub async fn build_state(config: &AppConfig) -> Result<AppState, ServerError> {
    let repository = build_repository(config).await?;
    let notifier = build_notifier(config);
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let service: SharedTaskService =
        TaskService::new(repository, notifier, clock, config.timezone);
    Ok(AppState::new(service))
}

/// Serves the task API until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServerError`] when start-up fails or the listener errors.
pub async fn serve(config: AppConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;
    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, timezone = %config.timezone, "listening");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
