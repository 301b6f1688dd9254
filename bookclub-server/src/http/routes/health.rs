//! Liveness of the service and its SQLite store

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the store answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthReport>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(ApiError::Unavailable)?;

    Ok(Json(HealthReport {
        status: "ok",
        database: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use sqlx::SqlitePool;

    #[tokio::test]
    async fn reports_database_ok() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        let state = Arc::new(AppState { pool });

        let Json(report) = health(State(state)).await.unwrap();
        assert_eq!(report.status, "ok");
        assert_eq!(report.database, "ok");
    }

    #[tokio::test]
    async fn closed_pool_is_503() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        pool.close().await;
        let state = Arc::new(AppState { pool });

        let err = health(State(state)).await.err().expect("closed pool must fail");
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
