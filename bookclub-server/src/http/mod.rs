//! HTTP server layer
//!
//! Axum server with:
//! - CORS (permissive or localhost only)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses of the form `{"message": ...}`

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{app, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
