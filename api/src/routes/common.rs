//! Extractors shared by every route group.
//!
//! They behave like axum's own `Path`, `Query` and `Json`, but reject with the
//! JSON error envelope instead of a plain-text body.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
};
use common::format_validation_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// JSON body that has been decoded and passed its `validator` rules.
///
/// The first failing field is reported as a `400 Bad Request`.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| ApiError::bad_request(format_validation_errors(&errors)))?;
        Ok(Self(value))
    }
}

/// Like [`ValidatedJson`], but an empty body yields `T::default()`.
pub struct OptionalJson<T>(pub T);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("Failed to parse the request body as JSON: {e}")))?;
        value
            .validate()
            .map_err(|errors| ApiError::bad_request(format_validation_errors(&errors)))?;
        Ok(Self(value))
    }
}
