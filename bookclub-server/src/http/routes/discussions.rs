//! Discussion endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{deleted, mutation};
use crate::db::repos::DiscussionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{Id, ValidJson};
use crate::http::server::AppState;
use crate::models::{Discussion, DiscussionInput, DiscussionListing, NewDiscussion};

/// GET /discussions - list discussions with the book owner's name
async fn list_discussions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DiscussionListing>>, ApiError> {
    Ok(Json(DiscussionRepo::new(&state.pool).list().await?))
}

/// POST /discussions - start a discussion of a book in a club
async fn create_discussion(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<DiscussionInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let discussion = NewDiscussion::try_from(input)?;
    let created = DiscussionRepo::new(&state.pool).create(discussion).await?;

    Ok((
        StatusCode::CREATED,
        mutation::<Discussion, _>("created", created),
    ))
}

/// GET /discussions/{id}
async fn get_discussion(
    State(state): State<Arc<AppState>>,
    id: Id<Discussion>,
) -> Result<Json<Discussion>, ApiError> {
    Ok(Json(DiscussionRepo::new(&state.pool).get(id.get()).await?))
}

/// PUT /discussions/{id}
async fn update_discussion(
    State(state): State<Arc<AppState>>,
    id: Id<Discussion>,
    ValidJson(patch): ValidJson<DiscussionInput>,
) -> Result<Json<Value>, ApiError> {
    let discussion = DiscussionRepo::new(&state.pool)
        .update(id.get(), patch)
        .await?;
    Ok(mutation::<Discussion, _>("updated", discussion))
}

/// DELETE /discussions/{id}
async fn delete_discussion(
    State(state): State<Arc<AppState>>,
    id: Id<Discussion>,
) -> Result<Json<Value>, ApiError> {
    DiscussionRepo::new(&state.pool).delete(id.get()).await?;
    Ok(deleted::<Discussion>())
}

/// Discussion routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/discussions", get(list_discussions).post(create_discussion))
        .route(
            "/discussions/{id}",
            get(get_discussion)
                .put(update_discussion)
                .delete(delete_discussion),
        )
}
