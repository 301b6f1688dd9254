//! bookclub-server: CRUD HTTP API for a book club
//!
//! Five resources (users, clubs, books, memberships, discussions), each
//! backed by one SQLite table. Handlers receive the pool through shared
//! state and delegate to one repository per resource.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, migrations, DbError, StoreConfig};
pub use http::{app, run_server, ApiError, AppState, ServerConfig};
