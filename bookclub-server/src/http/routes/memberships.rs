//! Membership endpoints
//!
//! Collection routes only; there is no `/memberships/{id}`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::mutation;
use crate::db::repos::MembershipRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{MemberListing, Membership, MembershipInput, NewMembership};

/// GET /memberships - list memberships with member names
async fn list_memberships(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberListing>>, ApiError> {
    Ok(Json(MembershipRepo::new(&state.pool).list().await?))
}

/// POST /memberships - add a user to a club
async fn create_membership(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<MembershipInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let membership = NewMembership::try_from(input)?;
    let created = MembershipRepo::new(&state.pool).create(membership).await?;

    Ok((
        StatusCode::CREATED,
        mutation::<Membership, _>("created", created),
    ))
}

/// Membership routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/memberships", get(list_memberships).post(create_membership))
}
