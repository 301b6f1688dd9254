//! Schema migrations
//!
//! Reversible SQL migrations live in `bookclub-server/migrations/` and are
//! embedded at compile time. sqlx records applied versions in
//! `_sqlx_migrations`, so running again is a no-op.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Schema version currently applied (0 when fresh or fully reverted).
pub async fn current_version(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let tracked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;
    if tracked == 0 {
        return Ok(0);
    }

    sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await
}

/// Apply all pending migrations, returning how many were applied.
pub async fn run(pool: &SqlitePool) -> Result<usize, MigrateError> {
    let before = current_version(pool).await?;
    MIGRATOR.run(pool).await?;

    let applied = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration() && m.version > before)
        .count();
    if applied == 0 {
        tracing::debug!(version = before, "schema up to date");
    } else {
        tracing::info!(applied, from = before, "applied migrations");
    }
    Ok(applied)
}

/// Revert every applied migration, dropping all tables.
///
/// Returns how many migrations were reverted.
pub async fn revert(pool: &SqlitePool) -> Result<usize, MigrateError> {
    let before = current_version(pool).await?;
    MIGRATOR.undo(pool, 0).await?;

    let reverted = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_down_migration() && m.version <= before)
        .count();
    tracing::info!(reverted, from = before, "reverted migrations");
    Ok(reverted)
}
