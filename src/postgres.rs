//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! The schema lives in `migrations/` and is applied idempotently at start-up.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type shared by task and task list adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the task and task list tables.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-01-000000_create_task_tables/up.sql");

/// Errors raised while preparing `PostgreSQL` storage.
#[derive(Debug, Error)]
pub enum StorageSetupError {
    /// The connection pool could not be built or a connection checked out.
    #[error("failed to connect to PostgreSQL: {0}")]
    Pool(#[from] PoolError),

    /// Applying the schema failed.
    #[error("failed to apply schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`StorageSetupError::Pool`] when the pool cannot establish its
/// initial connections.
pub fn connect(database_url: &str, pool_size: u32) -> Result<PgPool, StorageSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(pool_size).build(manager)?;
    Ok(pool)
}

/// Creates the task tables when they do not exist yet.
///
/// This is a blocking operation that should be called from `spawn_blocking`
/// or a synchronous context.
///
/// # Errors
///
/// Returns [`StorageSetupError`] when no connection is available or the SQL
/// fails.
pub fn apply_schema(pool: &PgPool) -> Result<(), StorageSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_SCHEMA_SQL)?;
    Ok(())
}
