//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPuppyRepository` - Puppy persistence
//! - `PostgresEventRepository` - Calendar event persistence and finders
//!
//! Schema lives in `migrations/` at the crate root and is embedded at build
//! time.

mod event_repository;
mod puppy_repository;

pub use event_repository::PostgresEventRepository;
pub use puppy_repository::PostgresPuppyRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized and timed by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(db_error("connect to database"))
}

/// Applies pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        tracing::error!(error = %e, "Database migration failed");
        DomainError::internal(format!("Failed to run migrations: {}", e))
    })
}

/// Maps a driver error to `INTERNAL_ERROR`, logging it on the way.
pub(crate) fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, action, "Database operation failed");
        DomainError::internal(format!("Failed to {}: {}", action, e))
    }
}

/// Like `db_error`, but a unique-key violation becomes `CONFLICT`.
pub(crate) fn insert_error(
    resource: &'static str,
    id: String,
) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        let duplicate = e
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);
        if duplicate {
            DomainError::conflict(format!("{} with id {} already exists", resource, id))
                .with_detail("resource", resource)
                .with_detail("id", id)
        } else {
            db_error("insert row")(e)
        }
    }
}

/// Maps a column decode failure to `INTERNAL_ERROR`.
pub(crate) fn decode_error(e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to decode row: {}", e))
}
