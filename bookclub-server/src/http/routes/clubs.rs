//! Club endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{deleted, mutation};
use crate::db::repos::ClubRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{Id, ValidJson};
use crate::http::server::AppState;
use crate::models::{Club, ClubInput, NewClub};

/// GET /clubs - list all clubs
async fn list_clubs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Club>>, ApiError> {
    Ok(Json(ClubRepo::new(&state.pool).list().await?))
}

/// POST /clubs - create a club
async fn create_club(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<ClubInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let club = NewClub::try_from(input)?;
    let created = ClubRepo::new(&state.pool).create(club).await?;

    Ok((StatusCode::CREATED, mutation::<Club, _>("created", created)))
}

/// GET /clubs/{id}
async fn get_club(
    State(state): State<Arc<AppState>>,
    id: Id<Club>,
) -> Result<Json<Club>, ApiError> {
    Ok(Json(ClubRepo::new(&state.pool).get(id.get()).await?))
}

/// PUT /clubs/{id}
async fn update_club(
    State(state): State<Arc<AppState>>,
    id: Id<Club>,
    ValidJson(patch): ValidJson<ClubInput>,
) -> Result<Json<Value>, ApiError> {
    let club = ClubRepo::new(&state.pool).update(id.get(), patch).await?;
    Ok(mutation::<Club, _>("updated", club))
}

/// DELETE /clubs/{id}
async fn delete_club(
    State(state): State<Arc<AppState>>,
    id: Id<Club>,
) -> Result<Json<Value>, ApiError> {
    ClubRepo::new(&state.pool).delete(id.get()).await?;
    Ok(deleted::<Club>())
}

/// Club routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clubs", get(list_clubs).post(create_club))
        .route(
            "/clubs/{id}",
            get(get_club).put(update_club).delete(delete_club),
        )
}
