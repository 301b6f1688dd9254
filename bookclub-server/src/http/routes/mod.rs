//! Route handlers organized by resource

pub mod health;
pub mod users;
pub mod clubs;
pub mod books;
pub mod memberships;
pub mod discussions;

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::Resource;

/// `{"message": "<Name> <verb>!", "<key>": {...}}` for single-record mutations.
fn mutation<R: Resource, T: Serialize>(verb: &str, item: T) -> Json<Value> {
    Json(json!({
        "message": format!("{} {}!", R::NAME, verb),
        (R::KEY): item,
    }))
}

/// `{"message": "<Name> deleted!"}`
fn deleted<R: Resource>() -> Json<Value> {
    Json(json!({ "message": format!("{} deleted!", R::NAME) }))
}
