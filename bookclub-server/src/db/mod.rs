//! Database layer - connection pool, schema migration and repositories
//!
//! # Design Principles
//!
//! - The pool is the only store handle; it is passed in, never global
//! - Every mutation is one statement (one implicit transaction)
//! - Rely on DB constraints and map violations - no check-then-insert
//! - List enrichment uses LEFT JOINs - no N+1 queries

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, StoreConfig};
pub use repos::*;
