//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use bookclub_server::{create_pool, migrations};

use crate::config::{BookclubConfig, StoreOverrides};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (default: sqlite://bookclub.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Revert all applied migrations, dropping every table
    #[arg(long)]
    pub revert: bool,
}

/// Apply (or revert) migrations and report the resulting schema version
pub async fn run_migrate(args: MigrateArgs, config: &BookclubConfig) -> Result<()> {
    let store_config = config.store(StoreOverrides {
        database_url: args.database_url,
        enforce_foreign_keys: false,
    });

    let pool = create_pool(&store_config)
        .await
        .with_context(|| format!("Failed to open {}", store_config.database_url))?;

    let (verb, count) = if args.revert {
        let reverted = migrations::revert(&pool)
            .await
            .context("Failed to revert migrations")?;
        ("Reverted", reverted)
    } else {
        let applied = migrations::run(&pool)
            .await
            .context("Failed to apply migrations")?;
        ("Applied", applied)
    };
    let version = migrations::current_version(&pool)
        .await
        .context("Failed to read schema version")?;

    tracing::info!(count, version, "migrations complete");
    println!("{} {} migration(s); schema at version {}", verb, count, version);

    pool.close().await;
    Ok(())
}
