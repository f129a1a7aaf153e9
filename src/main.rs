//! Taskboard HTTP server.
//!
//! ```bash
//! # In-memory storage on 127.0.0.1:8080
//! taskboard
//!
//! # PostgreSQL storage
//! taskboard --storage postgres --database-url postgres://localhost/taskboard
//! ```

use clap::Parser;
use std::sync::Arc;
use taskboard::api::{self, AppState};
use taskboard::config::{AppConfig, CliArgs, ConfigError, StorageConfig};
use taskboard::postgres::{self, StorageSetupError};
use taskboard::task::adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use taskboard::task_list::adapters::{
    memory::InMemoryTaskListRepository, postgres::PostgresTaskListRepository,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageSetupError),

    #[error("storage set-up task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let cli = CliArgs::parse();
    let config = AppConfig::load(&cli)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let app = match &config.storage {
        StorageConfig::Memory => {
            tracing::info!("using in-memory storage");
            api::router(AppState::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(InMemoryTaskListRepository::new()),
                config.max_tasks,
            ))
        }
        StorageConfig::Postgres {
            database_url,
            pool_size,
        } => {
            let url = database_url.clone();
            let size = *pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                let connected = postgres::connect(&url, size)?;
                postgres::apply_schema(&connected)?;
                Ok::<_, StorageSetupError>(connected)
            })
            .await??;
            tracing::info!(pool_size = size, "using PostgreSQL storage");
            api::router(AppState::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresTaskListRepository::new(pool)),
                config.max_tasks,
            ))
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        max_tasks = config.max_tasks,
        "taskboard listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
