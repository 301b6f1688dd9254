//! Book endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{deleted, mutation};
use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{Id, ValidJson};
use crate::http::server::AppState;
use crate::models::{Book, BookInput, NewBook};

/// GET /books - list all books
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(BookRepo::new(&state.pool).list().await?))
}

/// POST /books - create a book owned by `user_id`
async fn create_book(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<BookInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let book = NewBook::try_from(input)?;
    let created = BookRepo::new(&state.pool).create(book).await?;

    Ok((StatusCode::CREATED, mutation::<Book, _>("created", created)))
}

/// GET /books/{id}
async fn get_book(
    State(state): State<Arc<AppState>>,
    id: Id<Book>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(BookRepo::new(&state.pool).get(id.get()).await?))
}

/// PUT /books/{id}
async fn update_book(
    State(state): State<Arc<AppState>>,
    id: Id<Book>,
    ValidJson(patch): ValidJson<BookInput>,
) -> Result<Json<Value>, ApiError> {
    let book = BookRepo::new(&state.pool).update(id.get(), patch).await?;
    Ok(mutation::<Book, _>("updated", book))
}

/// DELETE /books/{id}
async fn delete_book(
    State(state): State<Arc<AppState>>,
    id: Id<Book>,
) -> Result<Json<Value>, ApiError> {
    BookRepo::new(&state.pool).delete(id.get()).await?;
    Ok(deleted::<Book>())
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
