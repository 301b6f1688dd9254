//! HTTP server command
//!
//! Opens the database, applies pending migrations and serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use bookclub_server::{create_pool, migrations, run_server};

use crate::config::{BookclubConfig, ServerOverrides, StoreOverrides};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "BOOKCLUB_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (default: sqlite://bookclub.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Allow requests from any origin (default)
    #[arg(long, conflicts_with = "cors_localhost")]
    pub cors_permissive: bool,

    /// Only allow requests from localhost origins
    #[arg(long)]
    pub cors_localhost: bool,

    /// Reject writes that reference missing rows or orphan existing ones
    #[arg(long)]
    pub enforce_foreign_keys: bool,
}

impl ServeArgs {
    fn cors_override(&self) -> Option<bool> {
        match (self.cors_permissive, self.cors_localhost) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &BookclubConfig) -> Result<()> {
    let server_config = config.server(ServerOverrides {
        bind: args.bind,
        cors_permissive: args.cors_override(),
    });
    let store_config = config.store(StoreOverrides {
        database_url: args.database_url,
        enforce_foreign_keys: args.enforce_foreign_keys,
    });

    tracing::info!(
        database = %store_config.database_url,
        foreign_keys = store_config.enforce_foreign_keys,
        "Starting bookclub server on {}",
        server_config.bind_addr
    );

    let pool = create_pool(&store_config)
        .await
        .context("Failed to create database pool")?;

    let applied = migrations::run(&pool)
        .await
        .context("Failed to apply migrations")?;
    if applied > 0 {
        tracing::info!(applied, "migrations applied");
    }

    // Run server (blocks until shutdown)
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
