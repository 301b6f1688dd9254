//! Configuration file for the bookclub CLI
//!
//! Layering, highest priority first:
//! 1. command-line flags
//! 2. environment (`DATABASE_URL`, `BOOKCLUB_BIND`; `.env` is loaded first)
//! 3. `~/.bookclub/config.toml` or the file given with `--config`
//! 4. built-in defaults
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//! cors_permissive = false
//!
//! [database]
//! url = "sqlite:///var/lib/bookclub/bookclub.db"
//! enforce_foreign_keys = true
//! max_connections = 5
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bookclub_server::{ServerConfig, StoreConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookclubConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub enforce_foreign_keys: Option<bool>,
    pub max_connections: Option<u32>,
}

/// Values taken from flags or environment; `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct StoreOverrides {
    pub database_url: Option<String>,
    pub enforce_foreign_keys: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

impl BookclubConfig {
    /// Default config file path: ~/.bookclub/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bookclub/config.toml")
    }

    /// Load config.
    ///
    /// An explicit path must exist. The default path is optional; when it
    /// is absent the defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config (invalid TOML)")
    }

    /// Resolve store settings against flags/environment.
    pub fn store(&self, overrides: StoreOverrides) -> StoreConfig {
        let defaults = StoreConfig::default();
        StoreConfig {
            database_url: overrides
                .database_url
                .or_else(|| self.database.url.clone())
                .unwrap_or(defaults.database_url),
            enforce_foreign_keys: overrides.enforce_foreign_keys
                || self
                    .database
                    .enforce_foreign_keys
                    .unwrap_or(defaults.enforce_foreign_keys),
            max_connections: self
                .database
                .max_connections
                .unwrap_or(defaults.max_connections),
        }
    }

    /// Resolve server settings against flags/environment.
    pub fn server(&self, overrides: ServerOverrides) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: overrides
                .bind
                .or(self.server.bind)
                .unwrap_or(defaults.bind_addr),
            cors_permissive: overrides
                .cors_permissive
                .or(self.server.cors_permissive)
                .unwrap_or(defaults.cors_permissive),
        }
    }
}
