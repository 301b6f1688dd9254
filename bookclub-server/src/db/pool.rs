//! Database connection pool management
//!
//! Uses sqlx SqlitePool over a single database file.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookclub.db";

/// Default maximum connections for the pool.
/// Kept low; SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite connection string, e.g. `sqlite://bookclub.db`
    pub database_url: String,

    /// Turn on `PRAGMA foreign_keys` for every connection.
    ///
    /// Off by default: references to missing rows are accepted on insert
    /// and deletes leave dependent rows dangling.
    pub enforce_foreign_keys: bool,

    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            enforce_foreign_keys: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::default()).await?;
/// ```
pub async fn create_pool(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);

    tracing::debug!(
        url = %config.database_url,
        foreign_keys = config.enforce_foreign_keys,
        "opening sqlite pool"
    );

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}
