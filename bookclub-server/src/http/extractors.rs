//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Resource, ValidationError};

/// Integer id of a `R` taken from the path.
///
/// A segment that is not all ASCII digits (signs included) is reported as
/// `R` not found, the same as an id with no row.
pub struct Id<R> {
    value: i64,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Id<R> {
    pub fn get(&self) -> i64 {
        self.value
    }
}

impl<R, S> FromRequestParts<S> for Id<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = |id: String| ApiError::NotFound {
            resource: R::NAME,
            id,
        };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(String::new()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found(raw));
        }
        let value = raw.parse::<i64>().map_err(|_| not_found(raw))?;

        Ok(Self {
            value,
            _resource: PhantomData,
        })
    }
}

/// JSON body whose decode failures are reported as `{"message": ...}` 400s
/// instead of axum's plain-text rejections.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
