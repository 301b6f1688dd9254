//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{deleted, mutation};
use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{Id, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewUser, User, UserInput, UserView};

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<UserInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = NewUser::try_from(input)?;
    let created = UserRepo::new(&state.pool).create(user).await?;

    Ok((
        StatusCode::CREATED,
        mutation::<User, _>("created", UserView::from(created)),
    ))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Id<User>,
) -> Result<Json<UserView>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id.get()).await?;
    Ok(Json(UserView::from(user)))
}

/// PUT /users/{id} - update the supplied fields
async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Id<User>,
    ValidJson(patch): ValidJson<UserInput>,
) -> Result<Json<Value>, ApiError> {
    let user = UserRepo::new(&state.pool).update(id.get(), patch).await?;
    Ok(mutation::<User, _>("updated", UserView::from(user)))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    id: Id<User>,
) -> Result<Json<Value>, ApiError> {
    UserRepo::new(&state.pool).delete(id.get()).await?;
    Ok(deleted::<User>())
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
